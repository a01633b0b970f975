/* Peer Code Generation Tests
 *
 * End-to-end checks of the generated declaration/definition units for the
 * full-peer strategy, plus the header-only and legacy export strategies.
 */

use peer_gen::codegen::{
    GenError, GeneratorOptions, LONG_LITERAL_SUFFIX, Strategy, emit_class,
};
use peer_gen::model::file::PeerModelFile;
use peer_gen::model::types::{
    ClassModel, ConstantValue, DeclaredKind, FieldModel, JavaType, MethodModel, ParamModel,
    Visibility,
};

fn string_type() -> JavaType {
    JavaType::Declared {
        name: "java.lang.String".to_string(),
        kind: DeclaredKind::String,
    }
}

fn method(name: &str, params: Vec<(&str, JavaType)>, return_type: JavaType, is_static: bool) -> MethodModel {
    MethodModel {
        name: name.to_string(),
        params: params
            .into_iter()
            .map(|(name, ty)| ParamModel {
                name: name.to_string(),
                ty,
            })
            .collect(),
        return_type,
        is_static,
        is_native: true,
        visibility: Visibility::Public,
        bound: true,
    }
}

fn constant_field(name: &str, ty: JavaType, value: ConstantValue) -> FieldModel {
    FieldModel {
        name: name.to_string(),
        ty,
        is_static: true,
        is_final: true,
        constant: Some(value),
    }
}

fn socket_class() -> ClassModel {
    ClassModel {
        qualified_name: "app.net.Socket".to_string(),
        simple_name: "Socket".to_string(),
        namespace: Some(vec!["app".to_string(), "net".to_string()]),
        methods: vec![
            method("Connect", vec![("host", string_type())], JavaType::Int, true),
            method("Close", vec![], JavaType::Void, false),
        ],
        fields: Vec::new(),
        superclass: None,
    }
}

fn emit_pair(class: &ClassModel) -> (String, String) {
    let units = emit_class(class, &GeneratorOptions::default()).unwrap();
    assert_eq!(units.len(), 2);
    let decl = String::from_utf8(units[0].bytes.clone()).unwrap();
    let def = String::from_utf8(units[1].bytes.clone()).unwrap();
    (decl, def)
}

#[test]
fn test_declaration_end_to_end() {
    let class = socket_class();
    let units = emit_class(&class, &GeneratorOptions::default()).unwrap();
    assert_eq!(units[0].filename, "SocketManagedPeer.h");
    assert_eq!(units[1].filename, "SocketManagedPeer.cpp");

    let (decl, _) = emit_pair(&class);

    assert!(decl.starts_with("/* DO NOT EDIT THIS FILE - it is machine generated */\n"));
    assert!(decl.contains("#pragma once"));
    assert!(decl.contains("#include <JNIManagedPeer.h>"));
    assert!(decl.contains("#include <jni.h>"));

    assert!(decl.contains("namespace app { namespace net {"));
    assert!(decl.contains("} } // namespace app.net"));

    assert!(decl.contains("class SocketManagedPeer : public ::JNI::ManagedPeer"));
    assert!(decl.contains("\tSocketManagedPeer();"));
    assert!(decl.contains("\texplicit SocketManagedPeer(jobject object);"));
    assert!(decl.contains("\t~SocketManagedPeer();"));
    assert!(decl.contains(
        "\tSocketManagedPeer& operator=(jobject object) { ::JNI::ManagedPeer::operator=(object); return *this; }"
    ));
    assert!(decl.contains("\tstatic jclass GetClass();"));

    assert!(decl.contains("\tstatic jint Connect(jstring host);"));
    assert!(decl.contains("\tvoid Close() const;"));
}

#[test]
fn test_definition_end_to_end() {
    let class = socket_class();
    let (_, def) = emit_pair(&class);

    /* Lifecycle members */
    assert!(def.contains("SocketManagedPeer::SocketManagedPeer()\n{\n}\n"));
    assert!(def.contains("SocketManagedPeer::SocketManagedPeer(jobject object)\n\t: ::JNI::ManagedPeer(object)\n{\n}\n"));
    assert!(def.contains("SocketManagedPeer::~SocketManagedPeer()\n{\n}\n"));

    /* Class accessor caches a ref-counted handle computed from the class
     * descriptor */
    assert!(def.contains("jclass SocketManagedPeer::GetClass()"));
    assert!(def.contains("\tstatic ::JNI::JClass clazz(\"Lapp/net/Socket;\");"));
    assert!(def.contains("\treturn clazz;"));

    /* Each body resolves its jmethodID once and issues one dispatcher call */
    assert!(def.contains(
        "\tstatic jmethodID methodID(Env().GetStaticMethodID(GetClass(), \"Connect\", \"(Ljava/lang/String;)I\"));"
    ));
    assert!(def.contains("\treturn Env().CallStaticIntMethod(GetClass(), methodID, host);"));

    assert!(def.contains(
        "\tstatic jmethodID methodID(Env().GetMethodID(GetClass(), \"Close\", \"()V\"));"
    ));
    assert!(def.contains("\tEnv().CallVoidMethod(Object(), methodID);"));

    assert_eq!(def.matches("Env().Call").count(), 2);
    assert_eq!(def.matches("static jmethodID").count(), 2);

    assert!(def.contains("void SocketManagedPeer::Close() const"));
}

#[test]
fn test_object_returns_are_cast() {
    let mut class = socket_class();
    class.methods = vec![
        method("Host", vec![], string_type(), false),
        method(
            "Buffers",
            vec![],
            JavaType::Array(Box::new(JavaType::Array(Box::new(JavaType::Byte)))),
            false,
        ),
    ];

    let (_, def) = emit_pair(&class);
    assert!(def.contains("\treturn (jstring)Env().CallObjectMethod(Object(), methodID);"));
    assert!(def.contains("\treturn (jobjectArray)Env().CallObjectMethod(Object(), methodID);"));
}

#[test]
fn test_pch_include_in_definition() {
    let class = socket_class();
    let options = GeneratorOptions {
        strategy: Strategy::FullPeer,
        pch: Some("stdafx.h".to_string()),
    };
    let units = emit_class(&class, &options).unwrap();
    let def = String::from_utf8(units[1].bytes.clone()).unwrap();
    assert!(def.contains("#include <stdafx.h>"));
}

#[test]
fn test_missing_namespace_is_class_scoped_error() {
    let mut class = socket_class();
    class.namespace = None;
    let err = emit_class(&class, &GeneratorOptions::default()).unwrap_err();
    assert_eq!(err, GenError::MissingNamespace);

    let diag = err.to_diagnostic(&class);
    assert_eq!(diag.key, "jniclass.missing.namespace");
    assert_eq!(diag.args, vec!["app.net.Socket".to_string()]);
}

#[test]
fn test_unsupported_type_is_class_scoped_error() {
    let mut class = socket_class();
    class.methods = vec![method(
        "Broken",
        vec![],
        JavaType::Array(Box::new(JavaType::Void)),
        false,
    )];
    let err = emit_class(&class, &GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, GenError::UnsupportedType(_)));
}

#[test]
fn test_constant_folding() {
    let mut class = socket_class();
    class.methods = Vec::new();
    class.fields = vec![
        constant_field("TIMEOUT", JavaType::Int, ConstantValue::Int(30)),
        constant_field("DEBUG", JavaType::Boolean, ConstantValue::Boolean(true)),
        constant_field("SEP", JavaType::Char, ConstantValue::Char(':' as u16)),
        constant_field("MAX_BYTES", JavaType::Long, ConstantValue::Long(1i64 << 40)),
        constant_field(
            "POS_INF",
            JavaType::Float,
            ConstantValue::Float(f32::INFINITY),
        ),
        constant_field(
            "NEG_INF",
            JavaType::Float,
            ConstantValue::Float(f32::NEG_INFINITY),
        ),
        constant_field(
            "POS_INF_D",
            JavaType::Double,
            ConstantValue::Double(f64::INFINITY),
        ),
        constant_field(
            "NEG_INF_D",
            JavaType::Double,
            ConstantValue::Double(f64::NEG_INFINITY),
        ),
        constant_field("RATIO", JavaType::Float, ConstantValue::Float(0.5)),
        /* not foldable: non-final */
        FieldModel {
            name: "counter".to_string(),
            ty: JavaType::Int,
            is_static: true,
            is_final: false,
            constant: Some(ConstantValue::Int(0)),
        },
    ];

    let (decl, _) = emit_pair(&class);

    assert!(decl.contains("#undef app__net__Socket_TIMEOUT"));
    assert!(decl.contains("#define app__net__Socket_TIMEOUT 30L"));
    assert!(decl.contains("#define app__net__Socket_DEBUG 1L"));
    assert!(decl.contains("#define app__net__Socket_SEP 58L"));
    assert!(decl.contains(&format!(
        "#define app__net__Socket_MAX_1BYTES {}{}",
        1i64 << 40,
        LONG_LITERAL_SUFFIX
    )));
    assert!(decl.contains("#define app__net__Socket_POS_1INF Inff"));
    assert!(decl.contains("#define app__net__Socket_NEG_1INF -Inff"));
    assert!(decl.contains("#define app__net__Socket_POS_1INF_1D InfD"));
    assert!(decl.contains("#define app__net__Socket_NEG_1INF_1D -InfD"));
    assert!(decl.contains("#define app__net__Socket_RATIO 0.5f"));
    assert!(!decl.contains("counter"));
}

#[test]
fn test_inherited_constants_come_root_first() {
    let base = ClassModel {
        qualified_name: "app.net.Base".to_string(),
        simple_name: "Base".to_string(),
        namespace: Some(vec!["app".to_string(), "net".to_string()]),
        methods: Vec::new(),
        fields: vec![constant_field("BASE", JavaType::Int, ConstantValue::Int(1))],
        superclass: None,
    };
    let mut class = socket_class();
    class.methods = Vec::new();
    class.fields = vec![constant_field("LEAF", JavaType::Int, ConstantValue::Int(2))];
    class.superclass = Some(Box::new(base));

    let (decl, _) = emit_pair(&class);
    let base_pos = decl.find("app__net__Socket_BASE").unwrap();
    let leaf_pos = decl.find("app__net__Socket_LEAF").unwrap();
    assert!(base_pos < leaf_pos);
}

#[test]
fn test_header_export_strategy() {
    let mut class = socket_class();
    class.methods.push(method(
        "Connect",
        vec![("address", string_type()), ("port", JavaType::Int)],
        JavaType::Int,
        true,
    ));

    let options = GeneratorOptions {
        strategy: Strategy::HeaderExport,
        pch: None,
    };
    let units = emit_class(&class, &options).unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].filename, "Socket.h");

    let header = String::from_utf8(units[0].bytes.clone()).unwrap();
    assert!(header.contains("#ifndef _Included_app__net__Socket"));
    assert!(header.contains("extern \"C\""));

    /* Both Connect overloads take the long form, Close keeps the short one */
    assert!(header.contains("JNIEXPORT jint JNICALL Java_app__net__Socket_Connect__"));
    assert!(!header.contains("Java_app__net__Socket_Connect\n"));
    assert!(header.contains("JNIEXPORT void JNICALL Java_app__net__Socket_Close\n"));

    assert!(header.contains(" * Signature: (Ljava/lang/String;)I"));
    assert!(header.contains("  (JNIEnv *, jclass, jstring);"));
    assert!(header.contains("  (JNIEnv *, jobject);"));
}

#[test]
fn test_legacy_export_strategy_keeps_short_symbols() {
    let mut class = socket_class();
    class.methods.push(method(
        "Connect",
        vec![("address", string_type()), ("port", JavaType::Int)],
        JavaType::Int,
        true,
    ));

    let options = GeneratorOptions {
        strategy: Strategy::LegacyExport,
        pch: None,
    };
    let units = emit_class(&class, &options).unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].filename, "Socket.h");
    assert_eq!(units[1].filename, "Socket.c");

    let header = String::from_utf8(units[0].bytes.clone()).unwrap();
    assert!(!header.contains("Java_app__net__Socket_Connect__"));

    let stubs = String::from_utf8(units[1].bytes.clone()).unwrap();
    assert!(stubs.contains("#include \"Socket.h\""));
    assert!(stubs.contains("JNIEXPORT jint JNICALL Java_app__net__Socket_Connect"));
    assert!(stubs.contains("  (JNIEnv *env, jclass cls, jstring host)"));
    assert!(stubs.contains("  (JNIEnv *env, jobject obj)"));
}

#[test]
fn test_model_file_parsing() {
    let json = r#"
    {
      "classes": [
        {
          "qualified-name": "app.net.Socket",
          "simple-name": "Socket",
          "namespace": ["app", "net"],
          "methods": [
            {
              "name": "Connect",
              "params": [
                { "name": "host",
                  "type": { "declared": { "name": "java.lang.String", "kind": "string" } } }
              ],
              "return-type": "int",
              "is-static": true,
              "is-native": true,
              "bound": true
            }
          ],
          "fields": [
            {
              "name": "TIMEOUT",
              "type": "int",
              "is-static": true,
              "is-final": true,
              "constant": { "int": 30 }
            }
          ]
        }
      ]
    }"#;

    let model: PeerModelFile = serde_json::from_str(json).unwrap();
    assert_eq!(model.classes.len(), 1);

    let class = &model.classes[0];
    assert_eq!(class.qualified_name, "app.net.Socket");
    assert_eq!(class.methods[0].return_type, JavaType::Int);
    assert!(class.methods[0].is_static);
    assert_eq!(
        class.fields[0].constant,
        Some(ConstantValue::Int(30))
    );

    let (decl, _) = emit_pair(class);
    assert!(decl.contains("static jint Connect(jstring host);"));
}
