#[macro_export]
macro_rules! vsv {
    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::vsv!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::VsvMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::VsvMap::new();
        $(
            object.insert($key.to_string(), $crate::vsv!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else goes through Value's From impls
    ($s:expr) => {
        $crate::Value::from($s)
    };
}
