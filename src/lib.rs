pub mod cli;
pub mod color;
pub mod decode;
pub mod pipeline;
pub mod preview;
pub mod sink;
pub mod theme;
