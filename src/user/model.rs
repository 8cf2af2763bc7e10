use crate::core::models::{id_field, json_object};

json_object! {
    /// The authenticated user's profile as returned by `me`.
    UserProfile
}

impl UserProfile {
    /// The user's platform id. Numeric ids are rendered as strings.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        id_field(&self.raw, "id")
    }
}
