use std::fmt::{self, Debug, Formatter};

/// Writes the contained string without the quotes [`Debug`] would normally add.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
