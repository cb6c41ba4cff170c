/// Return type of loops that only ever exit with an error, such as the snake device task.
///
/// Rust's `!` is unstable, so this empty enum stands in for it.
#[derive(Debug)]
pub enum Never {}
