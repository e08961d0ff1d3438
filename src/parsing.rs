pub mod grammar;
pub mod lexer;
pub mod parse_table;
pub mod parser;
pub mod token;

#[cfg(test)]
mod tests_lexer;
#[cfg(test)]
mod tests_parser;
#[cfg(test)]
mod tests_table;
