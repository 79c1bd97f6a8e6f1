// Two-stage heuristic deciding whether a URL points at a catalog product
use crate::model::{MatchReport, MatchStage, ReferenceProduct, SegmentSet};
use crate::parser::segment;
use tracing::debug;

/// Stage A accepts when strictly more than this many segments are shared.
const STRUCTURAL_OVERLAP_THRESHOLD: usize = 1;
/// Stage B accepts when at least this many title/id hits are found.
const LEXICAL_HITS_REQUIRED: usize = 2;

/// Checks whether `candidate_url` links to the same product as `reference`.
pub fn is_product_link(reference: &ReferenceProduct, candidate_url: &str) -> bool {
    explain_product_link(reference, candidate_url).is_match()
}

/// Runs the matcher and returns the evidence behind its verdict.
///
/// Stage A counts candidate segments also present in the canonical link.
/// If that is inconclusive, Stage B counts segments containing the
/// normalized title and, independently, the product id.
pub fn explain_product_link(reference: &ReferenceProduct, candidate_url: &str) -> MatchReport {
    let candidate = segment(candidate_url);
    let canonical = reference.reference_segments();

    let shared_segments = structural_overlap(&candidate, &canonical);
    if shared_segments > STRUCTURAL_OVERLAP_THRESHOLD {
        debug!(
            "{} matches product {} structurally ({} shared segments)",
            candidate_url, reference.id, shared_segments
        );
        return MatchReport {
            shared_segments,
            lexical_hits: 0,
            stage: Some(MatchStage::Structural),
        };
    }

    let lexical_hits = lexical_containment(
        &candidate,
        &reference.normalized_title(),
        &reference.identifier_text(),
    );
    let stage = (lexical_hits >= LEXICAL_HITS_REQUIRED).then_some(MatchStage::Lexical);

    debug!(
        "{} vs product {}: shared = {}, lexical hits = {}, match = {}",
        candidate_url,
        reference.id,
        shared_segments,
        lexical_hits,
        stage.is_some()
    );

    MatchReport {
        shared_segments,
        lexical_hits,
        stage,
    }
}

/// Number of candidate segments found anywhere in the canonical segments.
/// Duplicated candidate segments each count.
fn structural_overlap(candidate: &SegmentSet, canonical: &SegmentSet) -> usize {
    candidate.iter().filter(|s| canonical.contains(s)).count()
}

/// One point per segment containing the title, one more per segment
/// containing the id. Empty needles never score.
fn lexical_containment(candidate: &SegmentSet, title: &str, identifier: &str) -> usize {
    let hit = |haystack: &str, needle: &str| usize::from(!needle.is_empty() && haystack.contains(needle));

    candidate
        .iter()
        .map(|s| hit(s, title) + hit(s, identifier))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joao() -> ReferenceProduct {
        ReferenceProduct::new(
            16599221,
            "Produto de Teste 1",
            100.0,
            "http://www.lojadojoao.com.br/p/16599221",
        )
    }

    fn maria() -> ReferenceProduct {
        ReferenceProduct::new(
            12345,
            "Produto Legal",
            230.0,
            "http://www.lojadamaria.com.br/perfume-the-one-sport-masculino-edt/t/2/campanha_id/+752+",
        )
    }

    fn ze() -> ReferenceProduct {
        ReferenceProduct::new(
            8595,
            "Produto Sem Nome",
            140.0,
            "http://www.lojadoze.com.br/p/chapeu-caipira-de-palha-desfiado/campanha_id/34",
        )
    }

    #[test]
    fn original_fixtures() {
        let cases: &[(ReferenceProduct, &str, bool)] = &[
            (joao(), "http://www.lojadojoao.com.br/produto-de-teste-1-16599221", true),
            (joao(), "http://www.lojadojoao.com.br/", false),
            (joao(), "http://www.lojadojoao.com.br/categoria-teste", false),
            (joao(), "http://www.lojadojoao.com.br/search/helloword", false),
            (joao(), "http://www.lojadojoao.com.br/produto-de-teste-1-16599221?utm_teste=testando", true),
            (maria(), "http://www.lojadamaria.com.br/perfume-the-one-sport-masculino-edt?utm_source=ShopBack", true),
            (maria(), "http://www.lojadamaria.com.br/search/helloword", false),
            (maria(), "http://www.lojadamaria.com.br/categoria-legais", false),
            (maria(), "http://www.lojadamaria.com.br/perfume-the-one-sport-masculino-edt", true),
            (ze(), "http://www.lojadoze.com.br/chapeu-caipira-de-palha-desfiado", true),
            (ze(), "http://www.lojadoze.com.br/home", false),
            (ze(), "http://www.lojadoze.com.br/categoria-teste", false),
            (ze(), "http://www.lojadoze.com.br/chapeu-caipira-de-palha-desfiado?google", true),
        ];

        for (product, url, expected) in cases {
            assert_eq!(is_product_link(product, url), *expected, "{} vs {}", url, product.canonical_link);
        }

        let total = cases.iter().filter(|(p, u, _)| is_product_link(p, u)).count();
        assert_eq!(total, 6);
    }

    #[test]
    fn slug_with_title_and_id_matches_lexically() {
        let report = explain_product_link(&joao(), "http://www.lojadojoao.com.br/produto-de-teste-1-16599221");
        assert_eq!(report.shared_segments, 1);
        assert_eq!(report.lexical_hits, 2);
        assert_eq!(report.stage, Some(MatchStage::Lexical));
    }

    #[test]
    fn shared_slug_matches_structurally_without_id() {
        let report = explain_product_link(&ze(), "http://www.lojadoze.com.br/chapeu-caipira-de-palha-desfiado?google");
        assert_eq!(report.shared_segments, 2);
        assert_eq!(report.lexical_hits, 0);
        assert_eq!(report.stage, Some(MatchStage::Structural));
    }

    #[test]
    fn empty_candidate_never_matches() {
        for product in [joao(), maria(), ze()] {
            assert!(!is_product_link(&product, ""));
            assert_eq!(explain_product_link(&product, ""), MatchReport::default());
        }
    }

    #[test]
    fn empty_canonical_link_falls_back_to_lexical() {
        let product = ReferenceProduct::new(42, "Caneca Azul", 10.0, "");
        assert!(!is_product_link(&product, "http://loja.com/outra-coisa"));
        assert!(is_product_link(&product, "http://loja.com/caneca-azul-42"));
    }

    #[test]
    fn two_shared_segments_suffice_regardless_of_title() {
        let product = ReferenceProduct::new(1, "Nothing In Common", 1.0, "https://shop.com/alpha/beta/gamma");
        assert!(is_product_link(&product, "https://other.net/beta/zeta/alpha"));
    }

    #[test]
    fn duplicate_candidate_segments_each_count() {
        let product = ReferenceProduct::new(1, "Nothing In Common", 1.0, "https://shop.com/alpha");
        let report = explain_product_link(&product, "https://other.net/alpha/alpha");
        assert_eq!(report.shared_segments, 2);
        assert!(report.is_match());
    }

    #[test]
    fn title_alone_is_not_enough() {
        let report = explain_product_link(&joao(), "http://outra.loja.com/produto-de-teste-1");
        assert_eq!(report.lexical_hits, 1);
        assert!(!report.is_match());
    }

    #[test]
    fn id_alone_is_not_enough() {
        assert!(!is_product_link(&joao(), "http://outra.loja.com/item-16599221"));
    }

    #[test]
    fn id_in_two_segments_counts_twice() {
        assert!(is_product_link(&joao(), "http://outra.loja.com/16599221/ref-16599221"));
    }

    #[test]
    fn title_and_id_in_separate_segments_match() {
        assert!(is_product_link(&joao(), "http://outra.loja.com/produto-de-teste-1/16599221"));
    }

    #[test]
    fn empty_title_does_not_score() {
        let product = ReferenceProduct::new(7, "", 1.0, "http://loja.com/p/7");
        assert!(!is_product_link(&product, "http://outra.com/a/b/c"));
        assert!(!is_product_link(&product, "http://outra.com/item-7"));
    }

    #[test]
    fn trailing_space_in_title_must_appear_in_slug() {
        let product = ReferenceProduct::new(5, "Caneca ", 1.0, "http://x.com/p/5");
        let report = explain_product_link(&product, "http://y.com/caneca5");
        assert_eq!(report.lexical_hits, 1);
        assert!(!report.is_match());
        assert!(is_product_link(&product, "http://y.com/caneca-5"));
    }

    #[test]
    fn non_http_candidate_is_rejected() {
        assert!(!is_product_link(&joao(), "ftp://www.lojadojoao.com.br/p/16599221"));
    }
}
