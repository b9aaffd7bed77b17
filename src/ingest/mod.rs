pub mod keywords;
pub mod language;
pub mod scanner;

pub use language::Language;
pub use scanner::Scanner;
