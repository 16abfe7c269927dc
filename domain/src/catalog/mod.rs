//! Template catalog domain.
//!
//! - [`chatbot_domain::ChatbotDomain`] - the closed set of chatbot categories
//! - [`template::TemplateCatalog`] - static domain → templates lookup

pub mod chatbot_domain;
pub mod template;
