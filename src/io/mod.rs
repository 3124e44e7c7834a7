pub mod bus;
pub mod pit;
pub mod speaker;
pub mod uart;
