mod response_shaper;

pub use response_shaper::ResponseShaper;
