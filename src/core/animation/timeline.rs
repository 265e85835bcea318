//! Ordered composition of tweens with relative offsets.
//!
//! Positions follow the usual timeline convention: a step is placed at the
//! current end of the timeline, shifted by a signed offset, so `-500.0`
//! overlaps the previous step by half a second.

use super::descriptor::{AnimationDescriptor, ElementId};
use super::easing::Easing;

/// Where a step starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Relative to the end of the timeline so far
    FromEnd(f64),
    /// Absolute offset from the timeline start
    At(f64),
}

impl Default for Position {
    fn default() -> Self {
        Position::FromEnd(0.0)
    }
}

/// A descriptor placed on the timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep {
    pub start_ms: f64,
    pub descriptor: AnimationDescriptor,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    steps: Vec<TimelineStep>,
    end_ms: f64,
    default_easing: Option<Easing>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Easing for steps whose descriptor does not pick one
    pub fn with_default_easing(mut self, easing: Easing) -> Self {
        self.default_easing = Some(easing);
        self
    }

    /// Append a step right after the current end
    pub fn then(self, descriptor: AnimationDescriptor) -> Self {
        self.add(descriptor, Position::default())
    }

    /// Append a step that overlaps the current end by `overlap_ms`
    pub fn overlapping(self, descriptor: AnimationDescriptor, overlap_ms: f64) -> Self {
        self.add(descriptor, Position::FromEnd(-overlap_ms.abs()))
    }

    pub fn add(mut self, descriptor: AnimationDescriptor, position: Position) -> Self {
        let start_ms = self.resolve(position);
        self.push(start_ms, descriptor);
        self
    }

    /// Run `template` on every target, each one `stagger_ms` after the previous
    pub fn stagger<I>(
        mut self,
        targets: I,
        template: AnimationDescriptor,
        stagger_ms: f64,
        position: Position,
    ) -> Self
    where
        I: IntoIterator<Item = ElementId>,
    {
        let base = self.resolve(position);
        for (index, target) in targets.into_iter().enumerate() {
            let start_ms = base + stagger_ms.max(0.0) * index as f64;
            self.push(start_ms, template.retarget(target));
        }
        self
    }

    fn resolve(&self, position: Position) -> f64 {
        match position {
            Position::FromEnd(offset) => (self.end_ms + offset).max(0.0),
            Position::At(at) => at.max(0.0),
        }
    }

    fn push(&mut self, start_ms: f64, mut descriptor: AnimationDescriptor) {
        if descriptor.easing.is_none() {
            descriptor.easing = self.default_easing;
        }
        let end = start_ms + descriptor.end_ms();
        if end > self.end_ms {
            self.end_ms = end;
        }
        self.steps.push(TimelineStep {
            start_ms,
            descriptor,
        });
    }

    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    /// End of the last first run, repeats excluded
    pub fn duration_ms(&self) -> f64 {
        self.end_ms
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every element the timeline touches, in step order without duplicates
    pub fn targets(&self) -> Vec<ElementId> {
        let mut targets: Vec<ElementId> = Vec::new();
        for step in &self.steps {
            if !targets.contains(&step.descriptor.target) {
                targets.push(step.descriptor.target.clone());
            }
        }
        targets
    }

    /// Keep only the steps whose target passes `keep`
    pub fn retain_targets(&mut self, mut keep: impl FnMut(&ElementId) -> bool) {
        self.steps.retain(|step| keep(&step.descriptor.target));
    }
}
