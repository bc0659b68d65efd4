//! Main code generator.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::projection::{ClassProjectionGenerator, ValueTypeGenerator};
use crate::strategy::{Projection, select_projection};
use crate::writer::OutputFiles;
use idlgen_schema::TypeRegistry;
use tracing::{debug, info};

/// Main code generator that walks the worklist and dispatches each struct
/// to its projection emitter.
pub struct Generator<'a> {
    registry: &'a TypeRegistry,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over a built registry.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry, config: &'a GeneratorConfig) -> Self {
        Self { registry, config }
    }

    /// Generates the IDL and native text for every included struct, in
    /// registration order.
    ///
    /// # Errors
    /// Stops at the first struct whose projection fails.
    pub fn generate(&self) -> Result<OutputFiles, CodegenError> {
        let mut output = OutputFiles::new();
        let class_generator = ClassProjectionGenerator::new(self.registry, self.config);
        let value_generator = ValueTypeGenerator::new(self.registry);

        let mut classes = 0usize;
        let mut values = 0usize;

        for st in self.registry.worklist() {
            let projection = select_projection(st, self.registry)?;
            debug!(name = %st.qualified_name, ?projection, "emitting struct");

            match projection {
                Projection::Class => {
                    class_generator.generate(st, &mut output)?;
                    classes += 1;
                }
                Projection::ValueType => {
                    value_generator.generate(st, &mut output)?;
                    values += 1;
                }
            }
        }

        info!(classes, values, "generated projections");
        Ok(output)
    }
}
