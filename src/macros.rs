// src/macros.rs

/// String shorthand: `s!()` is an empty `String`, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-likes into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $(
            out.push_str($rest);
        )+
        out
    }};
}

/// Field value or the `N/A` placeholder.
#[macro_export]
macro_rules! or_na {
    ($opt:expr) => {
        match $opt {
            ::std::option::Option::Some(v) => ::std::string::String::from(v),
            ::std::option::Option::None => ::std::string::String::from($crate::config::consts::NA),
        }
    };
}
