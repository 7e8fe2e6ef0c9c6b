pub mod openai_responses_llm;
pub mod response_schema;
pub mod stateless_llm_interface;

pub use openai_responses_llm::*;
pub use response_schema::*;
pub use stateless_llm_interface::*;
