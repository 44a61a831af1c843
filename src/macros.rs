// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Raw row cells as the report parser sees them: `cells!["橘萌生", "12", "---"]`.
#[macro_export]
macro_rules! cells {
    ($($cell:expr),* $(,)?) => {
        ::std::vec![$(::std::string::String::from($cell)),*]
    };
}
