//! Literal attribute tables for knowledge profiles.

/// Builds an `Attributes` map from `key => value` pairs.
///
/// ```ignore
/// let defaults = attributes! {
///     "pricingModel" => "pay-as-you-go",
///     "regionCount" => 5,
/// };
/// ```
macro_rules! attributes {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut attrs = $crate::domain::options::Attributes::new();
        $(attrs.insert($key, $value);)*
        attrs
    }};
}
