/// Constructs a [`TobValue`](crate::TobValue) from a literal.
///
/// Array literals collect through
/// [`TobValue::from_elements`](crate::TobValue::from_elements), so a
/// sequence whose elements are all 2-element arrays becomes a map of those
/// pairs.
///
/// ```rust
/// use serde_tob::tob;
///
/// let value = tob!({ "name": "Alice", "age": 30 });
/// assert_eq!(value["name"], tob!("Alice"));
///
/// let pairs = tob!([["a", 1], ["b", 2]]);
/// assert!(pairs.is_map());
/// ```
#[macro_export]
macro_rules! tob {
    // Handle null
    (null) => {
        $crate::TobValue::Null
    };

    // Handle true
    (true) => {
        $crate::TobValue::Boolean(true)
    };

    // Handle false
    (false) => {
        $crate::TobValue::Boolean(false)
    };

    // Handle empty array
    ([]) => {
        $crate::TobValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::TobValue::from_elements(vec![$($crate::tob!($elem)),*])
    };

    // Handle empty map
    ({}) => {
        $crate::TobValue::Map($crate::TobMap::new())
    };

    // Handle non-empty map
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::TobMap::new();
        $(
            map.insert($crate::TobValue::from($key), $crate::tob!($value));
        )*
        $crate::TobValue::Map(map)
    }};

    // Fallback for any expression with a From conversion
    ($other:expr) => {
        $crate::TobValue::from($other)
    };
}
