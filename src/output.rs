/* Output writing with change detection.
 *
 * The sole idempotence guarantee of the tool lives here: re-running
 * generation against an unchanged model must not perturb file timestamps or
 * trigger downstream rebuilds, so a write only happens when the generated
 * bytes differ from what is already on disk (or when forced).
 */

use std::io;
use std::path::Path;

pub struct OutputWriter {
    pub force: bool,
    pub verbose: bool,
}

impl OutputWriter {
    pub fn new(force: bool, verbose: bool) -> Self {
        Self { force, verbose }
    }

    /// Write `bytes` to `target` if the content differs, the file is absent,
    /// or `force` is set. Returns whether a write happened.
    pub fn write_if_changed(&self, bytes: &[u8], target: &Path) -> io::Result<bool> {
        let mut must_write = false;
        let mut event = "No need to update file";

        if self.force {
            must_write = true;
            event = "Forcefully writing file";
        } else {
            match std::fs::read(target) {
                Ok(existing) => {
                    if existing != bytes {
                        must_write = true;
                        event = "Overwriting file";
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    must_write = true;
                    event = "Creating file";
                }
                Err(e) => return Err(e),
            }
        }

        if self.verbose {
            println!("[{} {}]", event, target.display());
        }

        if must_write {
            /* One whole-buffer write, no partial-write recovery: regeneration
             * is deterministic, so a corrupt target heals on the next run. */
            std::fs::write(target, bytes)?;
        }

        Ok(must_write)
    }
}
