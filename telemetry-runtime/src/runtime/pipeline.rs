use std::time::Instant;

use super::{Component, ComponentContext};

/// Ordered list of components.
///
/// Components are ticked in the order they were added, each one observing the
/// changes made by the components before it.
pub struct Pipeline<Cnf: Clone> {
    config: Cnf,
    components: Vec<(&'static str, Box<dyn Component<Cnf>>)>,
}

impl<Cnf: Clone> Pipeline<Cnf> {
    /// Construct an empty pipeline.
    ///
    /// Every component added with [`Pipeline::add_component_default`] is
    /// provided with a copy of this configuration.
    pub fn new(config: Cnf) -> Self {
        Self {
            config,
            components: Vec::new(),
        }
    }

    /// Add a component to the end of the pipeline.
    pub fn add_component<C>(&mut self, component: C)
    where
        C: Component<Cnf> + 'static,
    {
        let name = std::any::type_name::<C>()
            .rsplit("::")
            .next()
            .unwrap_or_default();

        log::debug!("Adding component {} to pipeline", name);

        self.components.push((name, Box::new(component)));
    }

    /// Construct a component from the pipeline configuration and add it.
    pub fn add_component_default<C>(&mut self)
    where
        C: Component<Cnf> + 'static,
    {
        self.add_component(C::new(self.config.clone()));
    }

    /// Number of components in the pipeline.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Tick every component once, then finish the tick on the context.
    pub fn tick(&mut self, ctx: &mut ComponentContext) {
        log::trace!(
            "Tick {} after {} ms",
            ctx.iteration(),
            ctx.delta().as_millis()
        );

        for (name, component) in self.components.iter_mut() {
            let component_tick_start = Instant::now();

            component.tick(ctx);

            if component_tick_start.elapsed() > crate::consts::COMPONENT_DELAY_THRESHOLD {
                log::warn!("Component {} is delaying execution", name);
            }
        }

        ctx.post_tick();
    }
}
