//! Translation requests
//!
//! A request stands in for the host compiler: it lists, in document order,
//! every gaming element or attribute the host would have handed over,
//! each with the parent it was found under and the context values in
//! effect there.

use gaming_compiler::{ContextValues, GamingCompiler};
use gaming_types::{Attribute, Element, IntermediateSection};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub section_id: String,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Job {
    Element {
        #[serde(default)]
        context: ContextValues,
        parent: Element,
        element: Element,
    },
    Attribute {
        #[serde(default)]
        context: ContextValues,
        parent: Element,
        attribute: Attribute,
    },
}

impl Request {
    pub fn from_json(json: &str) -> CliResult<Self> {
        let request: Request = serde_json::from_str(json)?;
        if request.section_id.is_empty() {
            return Err(CliError::InvalidRequest("section_id must not be empty".into()));
        }
        Ok(request)
    }

    /// Feed every job to `compiler` in order, collecting tuples in one section.
    pub fn run(self, compiler: &mut GamingCompiler) -> IntermediateSection {
        let mut section = IntermediateSection::new(self.section_id);
        for job in self.jobs {
            match job {
                Job::Element {
                    context,
                    parent,
                    element,
                } => {
                    debug!(parent = %parent.name, element = %element.name, "element job");
                    compiler.parse_element(&mut section, &parent, &element, &context);
                }
                Job::Attribute {
                    mut context,
                    parent,
                    attribute,
                } => {
                    debug!(parent = %parent.name, attribute = %attribute.name, "attribute job");
                    compiler.parse_attribute(&mut section, &parent, &attribute, &mut context);
                }
            }
        }
        section
    }
}
