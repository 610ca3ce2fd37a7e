//! Form state store
//!
//! Holds the current [`Draft`] snapshot and applies user edits to it. Every
//! mutation swaps in a new snapshot; a snapshot handed out earlier is never
//! modified.

use super::draft::{Draft, ItemId, ListKind, SubmissionRecord};

/// Monotonic id source scoped to one store instance
#[derive(Debug, Clone)]
struct IdCounter {
    next: u64,
}

impl IdCounter {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn next_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next);
        self.next += 1;
        id
    }
}

/// In-memory owner of the form draft
#[derive(Debug, Clone)]
pub struct FormStateStore {
    draft: Draft,
    ids: IdCounter,
}

impl FormStateStore {
    pub fn new() -> Self {
        let mut ids = IdCounter::new();
        let draft = Draft::initial_with(|| ids.next_id());
        Self { draft, ids }
    }

    /// Current snapshot of the draft
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_company_info(&mut self, text: impl Into<String>) {
        self.draft = self.draft.with_company_info(text);
    }

    /// Store the posting frequency parsed from raw input.
    ///
    /// Unparseable or negative input is stored as 0.
    pub fn set_posts_per_week(&mut self, raw: &str) {
        let value = parse_posts_per_week(raw);
        self.draft = self.draft.with_posts_per_week(value);
    }

    pub fn add_persona(&mut self) -> ItemId {
        self.append(ListKind::Personas)
    }

    pub fn add_subreddit(&mut self) -> ItemId {
        self.append(ListKind::Subreddits)
    }

    pub fn add_query(&mut self) -> ItemId {
        self.append(ListKind::Queries)
    }

    pub fn remove_persona(&mut self, id: ItemId) {
        self.remove(ListKind::Personas, id);
    }

    pub fn remove_subreddit(&mut self, id: ItemId) {
        self.remove(ListKind::Subreddits, id);
    }

    pub fn remove_query(&mut self, id: ItemId) {
        self.remove(ListKind::Queries, id);
    }

    pub fn update_persona(&mut self, id: ItemId, value: impl Into<String>) {
        self.update(ListKind::Personas, id, value.into());
    }

    pub fn update_subreddit(&mut self, id: ItemId, value: impl Into<String>) {
        self.update(ListKind::Subreddits, id, value.into());
    }

    pub fn update_query(&mut self, id: ItemId, value: impl Into<String>) {
        self.update(ListKind::Queries, id, value.into());
    }

    /// Append an empty item to `kind` and return its fresh id
    pub fn add_item(&mut self, kind: ListKind) -> ItemId {
        match kind {
            ListKind::Personas => self.add_persona(),
            ListKind::Subreddits => self.add_subreddit(),
            ListKind::Queries => self.add_query(),
        }
    }

    /// Remove an item from `kind`; a no-op while the list sits at its minimum
    pub fn remove_item(&mut self, kind: ListKind, id: ItemId) {
        match kind {
            ListKind::Personas => self.remove_persona(id),
            ListKind::Subreddits => self.remove_subreddit(id),
            ListKind::Queries => self.remove_query(id),
        }
    }

    pub fn update_item(&mut self, kind: ListKind, id: ItemId, value: impl Into<String>) {
        match kind {
            ListKind::Personas => self.update_persona(id, value),
            ListKind::Subreddits => self.update_subreddit(id, value),
            ListKind::Queries => self.update_query(id, value),
        }
    }

    fn append(&mut self, kind: ListKind) -> ItemId {
        let id = self.ids.next_id();
        self.draft = self.draft.with_item_added(kind, id);
        id
    }

    fn remove(&mut self, kind: ListKind, id: ItemId) {
        if !self.draft.can_remove(kind) {
            tracing::debug!(?kind, %id, "remove ignored, list at minimum length");
            return;
        }
        self.draft = self.draft.with_item_removed(kind, id);
    }

    fn update(&mut self, kind: ListKind, id: ItemId, value: String) {
        if !self.draft.list(kind).iter().any(|item| item.id == id) {
            tracing::debug!(?kind, %id, "update ignored, unknown item");
            return;
        }
        self.draft = self.draft.with_item_value(kind, id, value);
    }

    pub fn to_submission_record(&self) -> SubmissionRecord {
        self.draft.to_submission_record()
    }

    /// Restore the initial shape with fresh ids. Ids handed out before the
    /// reset are never reused, so a stale edit against one stays a no-op.
    pub fn reset(&mut self) {
        let ids = &mut self.ids;
        self.draft = Draft::initial_with(|| ids.next_id());
    }
}

impl Default for FormStateStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a posting frequency the way a number input is read: surrounding
/// whitespace is ignored and the leading integer is taken, so `"7 posts"`
/// reads as 7. No leading integer or a negative one yields 0; values past
/// `u32::MAX` saturate.
pub fn parse_posts_per_week(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::{MIN_PERSONAS, MIN_QUERIES, MIN_SUBREDDITS};
    use pretty_assertions::assert_eq;

    fn ids(store: &FormStateStore, kind: ListKind) -> Vec<ItemId> {
        store.draft().list(kind).iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_new_store_holds_initial_draft() {
        let store = FormStateStore::new();
        assert_eq!(store.draft(), &Draft::initial());
    }

    #[test]
    fn test_set_company_info_is_verbatim() {
        let mut store = FormStateStore::new();
        store.set_company_info("  We sell shoes  ");
        assert_eq!(store.draft().company_info, "  We sell shoes  ");
    }

    #[test]
    fn test_set_posts_per_week_coercion() {
        let mut store = FormStateStore::new();
        store.set_posts_per_week("abc");
        assert_eq!(store.draft().posts_per_week, 0);
        store.set_posts_per_week("-5");
        assert_eq!(store.draft().posts_per_week, 0);
        store.set_posts_per_week("7");
        assert_eq!(store.draft().posts_per_week, 7);
    }

    #[test]
    fn test_parse_posts_per_week_edge_cases() {
        assert_eq!(parse_posts_per_week(""), 0);
        assert_eq!(parse_posts_per_week("  12 "), 12);
        assert_eq!(parse_posts_per_week("3abc"), 3);
        assert_eq!(parse_posts_per_week("+4"), 4);
        assert_eq!(parse_posts_per_week("-0"), 0);
        assert_eq!(parse_posts_per_week("007"), 7);
        assert_eq!(parse_posts_per_week("99999999999"), u32::MAX);
    }

    #[test]
    fn test_add_appends_at_end_with_fresh_ids() {
        let mut store = FormStateStore::new();
        let before = ids(&store, ListKind::Personas);
        let a = store.add_persona();
        let b = store.add_persona();
        let after = ids(&store, ListKind::Personas);
        assert_eq!(&after[..2], &before[..]);
        assert_eq!(&after[2..], &[a, b]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_rapid_additions_never_collide() {
        let mut store = FormStateStore::new();
        for _ in 0..500 {
            store.add_query();
        }
        let mut seen = ids(&store, ListKind::Queries);
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut store = FormStateStore::new();
        let id = store.add_subreddit();
        store.remove_subreddit(id);
        let next = store.add_subreddit();
        assert_ne!(id, next);
    }

    #[test]
    fn test_remove_at_minimum_is_noop() {
        let mut store = FormStateStore::new();
        let before = store.draft().clone();
        let first_persona = before.personas[0].id;
        store.remove_persona(first_persona);
        store.remove_subreddit(before.subreddits[0].id);
        store.remove_query(before.queries[0].id);
        assert_eq!(store.draft(), &before);
    }

    #[test]
    fn test_remove_above_minimum() {
        let mut store = FormStateStore::new();
        let id = store.add_subreddit();
        store.update_subreddit(id, "rust");
        let first = store.draft().subreddits[0].id;
        store.remove_subreddit(first);
        assert_eq!(store.draft().subreddits.len(), 1);
        assert_eq!(store.draft().subreddits[0].value, "rust");
    }

    #[test]
    fn test_remove_unknown_id_keeps_list() {
        let mut store = FormStateStore::new();
        store.add_query();
        let before = store.draft().clone();
        store.remove_query(ItemId::new(9_999));
        assert_eq!(store.draft(), &before);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = FormStateStore::new();
        let before = store.draft().clone();
        store.update_persona(ItemId::new(77), "ghost");
        assert_eq!(store.draft(), &before);
    }

    #[test]
    fn test_update_only_touches_matching_list() {
        let mut store = FormStateStore::new();
        let query = store.draft().queries[0].id;
        let persona = store.draft().personas[0].id;
        store.update_query(query, "best running shoes");
        assert_eq!(store.draft().queries[0].value, "best running shoes");
        assert_eq!(store.draft().personas[0].value, "");
        assert_eq!(store.draft().subreddits[0].value, "");

        // A persona id means nothing to the query list
        store.update_query(persona, "misrouted");
        assert_eq!(store.draft().queries[0].value, "best running shoes");
    }

    #[test]
    fn test_earlier_snapshot_unchanged_by_mutation() {
        let mut store = FormStateStore::new();
        let snapshot = store.draft().clone();
        store.set_company_info("Acme");
        store.add_persona();
        assert_eq!(snapshot, Draft::initial());
        assert_ne!(store.draft(), &snapshot);
    }

    #[test]
    fn test_floors_hold_for_mixed_sequences() {
        let mut store = FormStateStore::new();
        // Deterministic pseudo-random walk over add/remove operations
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..2_000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let kind = ListKind::ALL[(seed % 3) as usize];
            if seed % 5 < 2 {
                store.add_item(kind);
            } else {
                let list = store.draft().list(kind);
                let id = list[(seed as usize / 7) % list.len()].id;
                store.remove_item(kind, id);
            }
            let draft = store.draft();
            assert!(draft.personas.len() >= MIN_PERSONAS);
            assert!(draft.subreddits.len() >= MIN_SUBREDDITS);
            assert!(draft.queries.len() >= MIN_QUERIES);
        }
    }

    #[test]
    fn test_persona_end_to_end_scenario() {
        let mut store = FormStateStore::new();
        store.add_persona();
        store.add_persona();
        assert_eq!(store.draft().personas.len(), 4);

        let third = store.draft().personas[2].id;
        store.remove_persona(third);
        let first = store.draft().personas[0].id;
        store.update_persona(first, "Busy Parent");

        let record = store.to_submission_record();
        assert_eq!(record.personas, vec!["Busy Parent".to_string()]);
        assert_eq!(store.draft().personas.len(), 3);
        assert!(store.draft().personas.iter().all(|p| p.id != third));
    }

    #[test]
    fn test_submission_record_keeps_relative_order() {
        let mut store = FormStateStore::new();
        let extra = store.add_persona();
        let [first, second] = [store.draft().personas[0].id, store.draft().personas[1].id];
        store.update_persona(extra, "Student");
        store.update_persona(first, "Founder");
        store.update_persona(second, "   ");
        let record = store.to_submission_record();
        assert_eq!(
            record.personas,
            vec!["Founder".to_string(), "Student".to_string()]
        );
    }

    #[test]
    fn test_reset_restores_initial_draft() {
        let mut store = FormStateStore::new();
        store.set_company_info("Acme");
        store.set_posts_per_week("3");
        let id = store.add_query();
        store.update_query(id, "q");
        store.reset();
        assert!(store.draft().same_values(&Draft::initial()));
        assert_eq!(store.draft().personas.len(), MIN_PERSONAS);
        assert_eq!(store.draft().subreddits.len(), MIN_SUBREDDITS);
        assert_eq!(store.draft().queries.len(), MIN_QUERIES);

        // Counter keeps running after reset
        let after_reset = store.add_query();
        assert!(after_reset > id);
    }

    #[test]
    fn test_reset_never_reuses_removed_ids() {
        let mut store = FormStateStore::new();
        store.add_persona();
        let removed = store.draft().personas[0].id;
        store.remove_persona(removed);
        let before_reset: Vec<ItemId> = ListKind::ALL
            .iter()
            .flat_map(|&kind| ids(&store, kind))
            .chain([removed])
            .collect();

        store.reset();
        for kind in ListKind::ALL {
            for id in ids(&store, kind) {
                assert!(!before_reset.contains(&id), "id {id} reused after reset");
            }
        }

        // A stale edit against the removed id lands nowhere
        store.update_persona(removed, "stale edit");
        assert!(store.draft().same_values(&Draft::initial()));
    }
}
