/// Builds a [`TokenBag`](crate::format::TokenBag) in the order written.
///
/// Keys are bare identifiers (keywords such as `type` are accepted) or
/// string literals.
///
/// ```rust
/// use outcome_core::tokens;
///
/// let bag = tokens! { type = "User", id = 42 };
/// assert_eq!(bag.len(), 2);
///
/// let quoted = tokens! { "property-name" => "Age" };
/// assert!(quoted.get("PROPERTY-NAME").is_some());
/// ```
#[macro_export]
macro_rules! tokens {
    () => {
        $crate::format::TokenBag::new()
    };
    ($($name:ident = $value:expr),+ $(,)?) => {
        $crate::format::TokenBag::new()
            $(.with(stringify!($name), $value))+
    };
    ($($name:literal => $value:expr),+ $(,)?) => {
        $crate::format::TokenBag::new()
            $(.with($name, $value))+
    };
}
