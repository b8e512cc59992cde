pub const FALLBACK_CATEGORY: &str = "Outros";

/// Keyword → category, checked in this order. Keywords must be lower-case.
pub const CATEGORY_RULES: &[(&str, &str)] = &[
    ("mercado", "Supermercado"),
    ("posto", "Combustível"),
    ("uber", "Transporte"),
    ("ifood", "Alimentação"),
];

/// First rule whose keyword appears anywhere in the lower-cased title wins.
pub fn categorize(title: &str, rules: &[(&'static str, &'static str)]) -> &'static str {
    let lower = title.to_lowercase();
    rules
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_keyword() {
        assert_eq!(categorize("Supermercado Dia", CATEGORY_RULES), "Supermercado");
        assert_eq!(categorize("Posto Ipiranga", CATEGORY_RULES), "Combustível");
        assert_eq!(categorize("Uber *Trip", CATEGORY_RULES), "Transporte");
        assert_eq!(categorize("IFD*IFOOD.COM", CATEGORY_RULES), "Alimentação");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("MERCADO LIVRE", CATEGORY_RULES), "Supermercado");
        assert_eq!(categorize("uBeR eats", CATEGORY_RULES), "Transporte");
    }

    #[test]
    fn test_unmatched_is_outros() {
        assert_eq!(categorize("Netflix.com", CATEGORY_RULES), "Outros");
        assert_eq!(categorize("", CATEGORY_RULES), "Outros");
    }

    #[test]
    fn test_declaration_order_wins() {
        // both "posto" and "uber" appear; "posto" is declared first
        assert_eq!(categorize("Uber no posto", CATEGORY_RULES), "Combustível");
        assert_eq!(categorize("Mercado do Posto", CATEGORY_RULES), "Supermercado");
    }

    #[test]
    fn test_custom_rules() {
        let rules = [("uber", "Viagem"), ("uber eats", "Alimentação")];
        assert_eq!(categorize("Uber Eats", &rules), "Viagem");
        assert_eq!(categorize("Uber Eats", &[]), "Outros");
    }

    #[test]
    fn test_deterministic() {
        for title in ["Mercado", "Padaria", "POSTO SHELL 1/2"] {
            assert_eq!(categorize(title, CATEGORY_RULES), categorize(title, CATEGORY_RULES));
        }
    }
}
