//! Scroll-triggered section markers and staggered card reveals.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANIMATE_CLASS, HOBBY_CARD_SELECTOR, IN_VIEW_CLASS, PROJECT_CARD_SELECTOR, SECTION_SELECTOR,
};
use crate::host::PageHost;
use crate::intersection::{IntersectionEntry, ObserverOptions};
use crate::settings::AnimationSettings;

/// What happens when a card that already revealed crosses the threshold again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealPolicy {
    /// Stop watching a card once its reveal is scheduled.
    #[default]
    Once,
    /// Keep watching and schedule the reveal on every crossing.
    Retrigger,
}

/// A reveal to apply after `delay_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledReveal<E> {
    pub target: E,
    pub delay_ms: u32,
}

/// Staggers reveals by each entry's position in its intersection batch.
#[derive(Debug)]
pub struct StaggeredReveal<E> {
    watched: Vec<E>,
    step_ms: u32,
    policy: RevealPolicy,
}

impl<E: Clone + PartialEq> StaggeredReveal<E> {
    pub fn new(elements: Vec<E>, step_ms: u32, policy: RevealPolicy) -> Self {
        Self {
            watched: elements,
            step_ms,
            policy,
        }
    }

    /// Elements still being watched.
    pub fn watched(&self) -> &[E] {
        &self.watched
    }

    /// Schedule reveals for the intersecting entries of one batch.
    ///
    /// The delay is `index * step`, where `index` counts every entry in the
    /// batch, intersecting or not. Under [`RevealPolicy::Once`] scheduled
    /// elements are dropped from the watch list and ignored afterwards.
    pub fn on_intersections(
        &mut self,
        entries: &[IntersectionEntry<E>],
    ) -> Vec<ScheduledReveal<E>> {
        let mut scheduled = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            if !entry.is_intersecting {
                continue;
            }
            let Some(position) = self.watched.iter().position(|e| *e == entry.target) else {
                continue;
            };
            if self.policy == RevealPolicy::Once {
                self.watched.remove(position);
            }
            let delay_ms = u32::try_from(index)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.step_ms);
            scheduled.push(ScheduledReveal {
                target: entry.target.clone(),
                delay_ms,
            });
        }
        scheduled
    }
}

/// Section entrance markers plus hobby and project card reveals.
#[derive(Debug)]
pub struct AnimationManager<E> {
    sections: Vec<E>,
    hobby_cards: StaggeredReveal<E>,
    project_cards: StaggeredReveal<E>,
    settings: AnimationSettings,
}

impl<E: Clone + PartialEq> AnimationManager<E> {
    pub fn new<H: PageHost<Element = E>>(host: &H, settings: AnimationSettings) -> Self {
        let sections = host.query_all(SECTION_SELECTOR);
        let hobby_cards = StaggeredReveal::new(
            host.query_all(HOBBY_CARD_SELECTOR),
            settings.hobby_stagger_ms,
            settings.card_reveal,
        );
        let project_cards = StaggeredReveal::new(
            host.query_all(PROJECT_CARD_SELECTOR),
            settings.project_stagger_ms,
            settings.card_reveal,
        );
        log::debug!(
            "Animations: {} sections, {} hobby cards, {} project cards",
            sections.len(),
            hobby_cards.watched().len(),
            project_cards.watched().len()
        );

        Self {
            sections,
            hobby_cards,
            project_cards,
            settings,
        }
    }

    pub fn sections(&self) -> &[E] {
        &self.sections
    }

    pub fn hobby_cards(&self) -> &[E] {
        self.hobby_cards.watched()
    }

    pub fn project_cards(&self) -> &[E] {
        self.project_cards.watched()
    }

    pub fn section_observer(&self) -> ObserverOptions {
        self.settings.section_observer
    }

    pub fn card_observer(&self) -> ObserverOptions {
        self.settings.card_observer
    }

    pub fn reveal_policy(&self) -> RevealPolicy {
        self.settings.card_reveal
    }

    /// Sections are marked once and never unmarked.
    pub fn on_section_intersections<H: PageHost<Element = E>>(
        &self,
        host: &H,
        entries: &[IntersectionEntry<E>],
    ) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            host.set_class(&entry.target, IN_VIEW_CLASS, true);
        }
    }

    pub fn on_hobby_intersections(
        &mut self,
        entries: &[IntersectionEntry<E>],
    ) -> Vec<ScheduledReveal<E>> {
        self.hobby_cards.on_intersections(entries)
    }

    pub fn on_project_intersections(
        &mut self,
        entries: &[IntersectionEntry<E>],
    ) -> Vec<ScheduledReveal<E>> {
        self.project_cards.on_intersections(entries)
    }

    /// Apply a reveal whose delay has elapsed.
    pub fn reveal<H: PageHost<Element = E>>(&self, host: &H, card: &E) {
        host.set_class(card, ANIMATE_CLASS, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::FakeHost;

    fn cards(host: &FakeHost, selector: &str, count: usize) -> Vec<usize> {
        (0..count).map(|_| host.add(&[selector])).collect()
    }

    #[test]
    fn test_five_hobby_cards_stagger_by_150() {
        let host = FakeHost::new();
        let hobby = cards(&host, HOBBY_CARD_SELECTOR, 5);
        let mut manager = AnimationManager::new(&host, AnimationSettings::default());

        let batch: Vec<_> = hobby.iter().map(|c| IntersectionEntry::entering(*c)).collect();
        let delays: Vec<u32> = manager
            .on_hobby_intersections(&batch)
            .iter()
            .map(|r| r.delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 150, 300, 450, 600]);
    }

    #[test]
    fn test_project_cards_stagger_by_200() {
        let host = FakeHost::new();
        let projects = cards(&host, PROJECT_CARD_SELECTOR, 3);
        let mut manager = AnimationManager::new(&host, AnimationSettings::default());

        let batch: Vec<_> = projects.iter().map(|c| IntersectionEntry::entering(*c)).collect();
        let scheduled = manager.on_project_intersections(&batch);
        assert_eq!(
            scheduled,
            vec![
                ScheduledReveal {
                    target: projects[0],
                    delay_ms: 0,
                },
                ScheduledReveal {
                    target: projects[1],
                    delay_ms: 200,
                },
                ScheduledReveal {
                    target: projects[2],
                    delay_ms: 400,
                },
            ]
        );
    }

    #[test]
    fn test_index_counts_non_intersecting_entries() {
        let host = FakeHost::new();
        let hobby = cards(&host, HOBBY_CARD_SELECTOR, 3);
        let mut manager = AnimationManager::new(&host, AnimationSettings::default());

        let batch = vec![
            IntersectionEntry::leaving(hobby[0]),
            IntersectionEntry::entering(hobby[1]),
            IntersectionEntry::entering(hobby[2]),
        ];
        let delays: Vec<u32> = manager
            .on_hobby_intersections(&batch)
            .iter()
            .map(|r| r.delay_ms)
            .collect();
        assert_eq!(delays, vec![150, 300]);
    }

    #[test]
    fn test_once_policy_ignores_second_crossing() {
        let host = FakeHost::new();
        let hobby = cards(&host, HOBBY_CARD_SELECTOR, 2);
        let mut manager = AnimationManager::new(&host, AnimationSettings::default());

        let batch = vec![IntersectionEntry::entering(hobby[0])];
        assert_eq!(manager.on_hobby_intersections(&batch).len(), 1);
        assert!(manager.on_hobby_intersections(&batch).is_empty());
        assert_eq!(manager.hobby_cards(), &[hobby[1]]);
    }

    #[test]
    fn test_retrigger_policy_reschedules() {
        let host = FakeHost::new();
        let hobby = cards(&host, HOBBY_CARD_SELECTOR, 1);
        let settings = AnimationSettings {
            card_reveal: RevealPolicy::Retrigger,
            ..Default::default()
        };
        let mut manager = AnimationManager::new(&host, settings);

        let batch = vec![IntersectionEntry::entering(hobby[0])];
        assert_eq!(manager.on_hobby_intersections(&batch).len(), 1);
        assert_eq!(manager.on_hobby_intersections(&batch).len(), 1);
        assert_eq!(manager.hobby_cards().len(), 1);
    }

    #[test]
    fn test_reveal_and_section_markers() {
        let host = FakeHost::new();
        let section = host.add_section("about", 0.0, 100.0);
        let hobby = cards(&host, HOBBY_CARD_SELECTOR, 1);
        let manager = AnimationManager::new(&host, AnimationSettings::default());

        manager.on_section_intersections(&host, &[IntersectionEntry::entering(section)]);
        manager.on_section_intersections(&host, &[IntersectionEntry::leaving(section)]);
        assert!(host.has_class(&section, IN_VIEW_CLASS));

        manager.reveal(&host, &hobby[0]);
        assert_eq!(host.classes(hobby[0]), vec![ANIMATE_CLASS.to_string()]);
    }
}
