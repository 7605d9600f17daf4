/// Anything with a first and last name.
///
/// `full_name` has a default; implementors override it to change the formatting
/// and can still reach the plain form through [`base_full_name`].
pub trait Named {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;

    fn full_name(&self) -> String {
        base_full_name(self.first_name(), self.last_name())
    }

    fn walk(&self) -> &'static str {
        tracing::info!("🚶 {} is walking", self.full_name());
        "Walking"
    }
}

pub fn base_full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}
