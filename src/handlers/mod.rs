pub mod advice;

pub use advice::AdviceHandler;
