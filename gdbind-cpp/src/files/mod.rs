mod engine_hpp;

pub use engine_hpp::EngineHpp;
