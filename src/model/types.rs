/* Input data model for peer generation.
 *
 * The surrounding tool (annotation discovery, classpath handling) hands the
 * generator a fully resolved class model; nothing here is re-resolved. The
 * model is read-only for the duration of one generation pass.
 */

use serde_derive::{Deserialize, Serialize};

/// A resolved Java type as seen by the descriptor builder.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JavaType {
    Void,
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Array(Box<JavaType>),
    Declared {
        /* Fully qualified dotted name, e.g. "java.lang.String" */
        name: String,
        #[serde(default)]
        kind: DeclaredKind,
    },
}

/* How a declared (reference) type relates to the special JNI handle types */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclaredKind {
    String,
    Throwable,
    Class,
    #[default]
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParamModel {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: JavaType,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MethodModel {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamModel>,
    pub return_type: JavaType,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_native: bool,
    #[serde(default)]
    pub visibility: Visibility,
    /* Set when the method carries the peer-binding annotation */
    #[serde(default)]
    pub bound: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FieldModel {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: JavaType,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub constant: Option<ConstantValue>,
}

/* Compile-time constant value of a static final field. The integer family
 * (byte, short, int) collapses into one variant, matching how constant
 * expressions surface in the resolved model. */
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstantValue {
    Int(i32),
    Boolean(bool),
    Char(u16),
    Long(i64),
    Float(f32),
    Double(f64),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClassModel {
    pub qualified_name: String,
    pub simple_name: String,
    /* Target namespace path for the generated peer, e.g. ["app", "net"] */
    #[serde(default)]
    pub namespace: Option<Vec<String>>,
    #[serde(default)]
    pub methods: Vec<MethodModel>,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
    /* Superclass chain, root reachable by walking up. Never cyclic. */
    #[serde(default)]
    pub superclass: Option<Box<ClassModel>>,
}

impl ClassModel {
    /// Binary name with `/`-separated package segments ("app/net/Socket").
    pub fn binary_name(&self) -> String {
        self.qualified_name.replace('.', "/")
    }

    /// Methods carrying the peer-binding annotation, in declaration order.
    pub fn bound_methods(&self) -> impl Iterator<Item = &MethodModel> {
        self.methods.iter().filter(|m| m.bound)
    }

    /// Methods declared native, in declaration order.
    pub fn native_methods(&self) -> impl Iterator<Item = &MethodModel> {
        self.methods.iter().filter(|m| m.is_native)
    }

    /// All fields including inherited ones, collected root-to-leaf so that a
    /// subclass sees its ancestors' fields first. Iterative walk with an
    /// explicit stack; the chain is a singly linked list, never a cycle.
    pub fn all_fields(&self) -> Vec<&FieldModel> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(class) = current {
            chain.push(class);
            current = class.superclass.as_deref();
        }

        let mut fields = Vec::new();
        while let Some(class) = chain.pop() {
            fields.extend(class.fields.iter());
        }
        fields
    }
}
