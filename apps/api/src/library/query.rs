//! Query surface: facet filtering, free-text search and display capping over
//! the generated corpus.
//!
//! Filtering is pure: it borrows from the immutable `Library`, never reorders,
//! and is recomputed from the full collection on every call.

use serde::Serialize;
use tracing::debug;

use crate::library::generator::{CodingPromptEntry, Library, RequirementPromptEntry};

/// Max records shown per query before the caller must narrow the filters.
pub const DEFAULT_DISPLAY_CAP: usize = 50;

/// Which collection a query runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Coding,
    Requirements,
}

/// Active facet filters. `None` means "no constraint".
///
/// `category` matches the sub-category on the coding tab and the requirement
/// type on the requirements tab. `tech_stack` and `vibe` only exist on coding
/// records; `scale` only on requirement records. A filter for a field the
/// tab's records do not carry is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFilters {
    pub domain: Option<String>,
    pub category: Option<String>,
    pub tech_stack: Option<String>,
    pub vibe: Option<String>,
    pub scale: Option<String>,
}

/// Common view over both record types for filtering.
pub trait PromptRecord {
    fn prompt(&self) -> &str;

    /// Sub-category for coding prompts, requirement type for requirement prompts.
    fn category(&self) -> &str;

    /// Exact, case-sensitive match of every facet filter this record carries.
    fn matches_facets(&self, filters: &PromptFilters) -> bool;

    /// Case-insensitive substring match on the prompt text or category.
    /// `needle` must already be lowercased.
    fn matches_search(&self, needle: &str) -> bool {
        self.prompt().to_lowercase().contains(needle)
            || self.category().to_lowercase().contains(needle)
    }
}

impl PromptRecord for CodingPromptEntry {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn category(&self) -> &str {
        &self.sub_category
    }

    fn matches_facets(&self, filters: &PromptFilters) -> bool {
        facet_eq(&filters.domain, &self.domain)
            && facet_eq(&filters.category, &self.sub_category)
            && facet_eq(&filters.tech_stack, &self.tech_stack)
            && facet_eq(&filters.vibe, &self.vibe)
    }
}

impl PromptRecord for RequirementPromptEntry {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn category(&self) -> &str {
        &self.requirement_type
    }

    fn matches_facets(&self, filters: &PromptFilters) -> bool {
        facet_eq(&filters.domain, &self.domain)
            && facet_eq(&filters.category, &self.requirement_type)
            && facet_eq(&filters.scale, &self.scale)
    }
}

fn facet_eq(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().map_or(true, |f| f == value)
}

/// Returns the records matching every set filter and, when `query` is
/// non-empty, the search text. Original order is preserved.
///
/// `query` is used exactly as given: surrounding whitespace is part of the
/// substring, so a whitespace-only query still constrains.
pub fn filter_records<'a, R: PromptRecord>(
    records: &'a [R],
    filters: &PromptFilters,
    query: &str,
) -> Vec<&'a R> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.matches_facets(filters))
        .filter(|r| needle.is_empty() || r.matches_search(&needle))
        .collect()
}

/// Filtered view of one tab's collection.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QueryResults<'a> {
    Coding(Vec<&'a CodingPromptEntry>),
    Requirements(Vec<&'a RequirementPromptEntry>),
}

impl<'a> QueryResults<'a> {
    pub fn len(&self) -> usize {
        match self {
            QueryResults::Coding(r) => r.len(),
            QueryResults::Requirements(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keeps the first `limit` records. Returns whether any were dropped.
    pub fn cap(self, limit: usize) -> (Self, bool) {
        match self {
            QueryResults::Coding(r) => {
                let (shown, has_more) = cap(&r, limit);
                (QueryResults::Coding(shown.to_vec()), has_more)
            }
            QueryResults::Requirements(r) => {
                let (shown, has_more) = cap(&r, limit);
                (QueryResults::Requirements(shown.to_vec()), has_more)
            }
        }
    }
}

/// Runs a query against the collection selected by `tab`.
pub fn query_library<'a>(
    library: &'a Library,
    tab: Tab,
    filters: &PromptFilters,
    query: &str,
) -> QueryResults<'a> {
    let results = match tab {
        Tab::Coding => QueryResults::Coding(filter_records(&library.coding_prompts, filters, query)),
        Tab::Requirements => QueryResults::Requirements(filter_records(
            &library.requirement_prompts,
            filters,
            query,
        )),
    };

    debug!(
        "Prompt query tab={:?} filters={:?} query={:?} matched {}",
        tab,
        filters,
        query,
        results.len()
    );

    results
}

/// Display cap: the first `limit` results and whether more exist.
pub fn cap<T>(results: &[T], limit: usize) -> (&[T], bool) {
    if results.len() > limit {
        (&results[..limit], true)
    } else {
        (results, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::generator::generate_library;
    use crate::library::generator::tests::sample_taxonomy;
    use crate::library::taxonomy::Taxonomy;

    fn filters_domain(domain: &str) -> PromptFilters {
        PromptFilters {
            domain: Some(domain.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_domain_filter_on_sample_returns_four() {
        let library = generate_library(&sample_taxonomy());
        let results = filter_records(&library.coding_prompts, &filters_domain("SaaS"), "");
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.domain == "SaaS"));
    }

    #[test]
    fn test_facet_match_is_case_sensitive() {
        let library = generate_library(&sample_taxonomy());
        let results = filter_records(&library.coding_prompts, &filters_domain("saas"), "");
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_prompt() {
        let library = generate_library(&sample_taxonomy());
        let results = filter_records(&library.coding_prompts, &PromptFilters::default(), "VUE");
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.tech_stack == "Vue"));
    }

    #[test]
    fn test_search_matches_category_field() {
        let library = generate_library(&sample_taxonomy());
        let results = filter_records(
            &library.requirement_prompts,
            &PromptFilters::default(),
            "roadmap",
        );
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.requirement_type == "Roadmap"));
    }

    #[test]
    fn test_search_with_no_hits_is_empty_not_error() {
        let library = generate_library(&sample_taxonomy());
        let results = query_library(
            &library,
            Tab::Coding,
            &PromptFilters::default(),
            "kubernetes-operator-xyz",
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_filters_preserve_original_order() {
        let library = generate_library(&Taxonomy::builtin());
        let filters = PromptFilters {
            vibe: Some("Concise".to_string()),
            ..Default::default()
        };
        let results = filter_records(&library.coding_prompts, &filters, "");
        let positions: Vec<usize> = results
            .iter()
            .map(|r| {
                library
                    .coding_prompts
                    .iter()
                    .position(|p| p.id == r.id)
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_adding_a_filter_never_grows_results() {
        let library = generate_library(&Taxonomy::builtin());
        let f1 = filters_domain("FinTech");
        let f2 = PromptFilters {
            tech_stack: Some("Rust (Axum)".to_string()),
            ..f1.clone()
        };
        let f3 = PromptFilters {
            vibe: Some("Security Auditor".to_string()),
            ..f2.clone()
        };
        let n1 = filter_records(&library.coding_prompts, &f1, "").len();
        let n2 = filter_records(&library.coding_prompts, &f2, "").len();
        let n3 = filter_records(&library.coding_prompts, &f3, "").len();
        let n4 = filter_records(&library.coding_prompts, &f3, "rollback").len();
        assert!(n1 >= n2 && n2 >= n3 && n3 >= n4);
        assert!(n4 > 0);
    }

    #[test]
    fn test_every_result_satisfies_every_filter() {
        let library = generate_library(&Taxonomy::builtin());
        let filters = PromptFilters {
            domain: Some("EdTech".to_string()),
            category: Some("Testing".to_string()),
            tech_stack: Some("Playwright".to_string()),
            vibe: None,
            scale: None,
        };
        let results = filter_records(&library.coding_prompts, &filters, "suite");
        assert!(!results.is_empty());
        for r in results {
            assert_eq!(r.domain, "EdTech");
            assert_eq!(r.sub_category, "Testing");
            assert_eq!(r.tech_stack, "Playwright");
            assert!(
                r.prompt.to_lowercase().contains("suite")
                    || r.sub_category.to_lowercase().contains("suite")
            );
        }
    }

    #[test]
    fn test_requirements_tab_uses_type_and_scale() {
        let library = generate_library(&Taxonomy::builtin());
        let filters = PromptFilters {
            category: Some("PRD".to_string()),
            scale: Some("MVP".to_string()),
            // coding-only facets are not applied on this tab
            vibe: Some("Concise".to_string()),
            ..Default::default()
        };
        let results = filter_records(&library.requirement_prompts, &filters, "");
        assert_eq!(results.len(), Taxonomy::builtin().domains.len());
        assert!(results
            .iter()
            .all(|r| r.requirement_type == "PRD" && r.scale == "MVP"));
    }

    #[test]
    fn test_reset_returns_full_collection_in_order() {
        let library = generate_library(&Taxonomy::builtin());
        let _narrowed = query_library(&library, Tab::Coding, &filters_domain("SaaS"), "auth");
        let filters = PromptFilters::default();
        let reset = filter_records(&library.coding_prompts, &filters, "");
        assert_eq!(reset.len(), library.coding_prompts.len());
        assert!(reset
            .iter()
            .zip(&library.coding_prompts)
            .all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_empty_query_is_no_constraint() {
        let library = generate_library(&sample_taxonomy());
        let results = filter_records(&library.coding_prompts, &PromptFilters::default(), "");
        assert_eq!(results.len(), library.coding_prompts.len());
    }

    #[test]
    fn test_query_whitespace_is_part_of_the_needle() {
        let library = generate_library(&sample_taxonomy());
        for query in ["Vue ", "   ", " api design", "Vue"] {
            let needle = query.to_lowercase();
            let expected: Vec<&str> = library
                .coding_prompts
                .iter()
                .filter(|r| {
                    r.prompt.to_lowercase().contains(&needle)
                        || r.sub_category.to_lowercase().contains(&needle)
                })
                .map(|r| r.id.as_str())
                .collect();
            let actual: Vec<&str> =
                filter_records(&library.coding_prompts, &PromptFilters::default(), query)
                    .iter()
                    .map(|r| r.id.as_str())
                    .collect();
            assert_eq!(actual, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_whitespace_only_query_is_a_constraint() {
        let library = generate_library(&sample_taxonomy());
        let results = filter_records(&library.coding_prompts, &PromptFilters::default(), "   ");
        assert!(results.len() < library.coding_prompts.len());
        assert!(results.iter().all(|r| r.prompt.contains("   ")));
    }

    #[test]
    fn test_cap_below_and_above_limit() {
        let items: Vec<u32> = (0..120).collect();
        let (shown, has_more) = cap(&items, DEFAULT_DISPLAY_CAP);
        assert_eq!(shown.len(), 50);
        assert!(has_more);
        assert_eq!(shown[0], 0);

        let (shown, has_more) = cap(&items[..50], DEFAULT_DISPLAY_CAP);
        assert_eq!(shown.len(), 50);
        assert!(!has_more, "exactly the cap is not 'more'");

        let (shown, has_more) = cap(&items[..3], DEFAULT_DISPLAY_CAP);
        assert_eq!(shown.len(), 3);
        assert!(!has_more);
    }

    #[test]
    fn test_query_results_cap_on_builtin() {
        let library = generate_library(&Taxonomy::builtin());
        let results = query_library(&library, Tab::Requirements, &PromptFilters::default(), "");
        let total = results.len();
        let (shown, has_more) = results.cap(DEFAULT_DISPLAY_CAP);
        assert_eq!(shown.len(), total.min(DEFAULT_DISPLAY_CAP));
        assert_eq!(has_more, total > DEFAULT_DISPLAY_CAP);
    }

    #[test]
    fn test_tab_serializes_lowercase() {
        let json = serde_json::to_string(&Tab::Requirements).unwrap();
        assert_eq!(json, r#""requirements""#);
    }
}
