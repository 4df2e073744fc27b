//*** START FILE: src/parsing/card_parser.rs ***//
use super::tag_extractor::extract_text_between_tag;
use crate::error::MissingTagError;
use crate::types::card_data::CardFields;

// Delimiter pairs, in the order they are checked
const CARD_TAGS: [(&str, &str); 3] = [
    ("<Front>", "</Front>"),
    ("<Back>", "</Back>"),
    ("<Extra>", "</Extra>"),
];

/// Parses the generator's tagged reply into card fields.
///
/// All three tag pairs are required. The first missing one is reported;
/// nothing is returned for the fields that were found.
pub fn parse_card_fields(llm_content: &str) -> Result<CardFields, MissingTagError> {
    let [front, back, extra] = CARD_TAGS;
    Ok(CardFields {
        front: extract_text_between_tag(llm_content, front.0, front.1)?.to_string(),
        back: extract_text_between_tag(llm_content, back.0, back.1)?.to_string(),
        extra: extract_text_between_tag(llm_content, extra.0, extra.1)?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(order: &[(&str, &str)]) -> String {
        order
            .iter()
            .map(|(tag, content)| format!("<{tag}>{content}</{tag}>"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn parses_example_output() {
        let raw = "Here is your card:\n<Front>mild, minor</Front>\n<Back>lindrig | mild</Back>\n<Extra>(lindrigt, lindriga)<br> Inte allvarlig</Extra>\n";
        let fields = parse_card_fields(raw).unwrap();
        assert_eq!(fields.front, "mild, minor");
        assert_eq!(fields.back, "lindrig | mild");
        assert_eq!(fields.extra, "(lindrigt, lindriga)<br> Inte allvarlig");
    }

    #[test]
    fn any_tag_order_recovers_exact_content() {
        let front = "serious, solemn";
        let back = "allvarlig | högtidlig";
        let extra = "\n<b>1.</b> solemn<br>\n<i>A serious illness.</i><br>en allvarlig sjukdom\n";
        let orders = [
            [("Front", front), ("Back", back), ("Extra", extra)],
            [("Extra", extra), ("Front", front), ("Back", back)],
            [("Back", back), ("Extra", extra), ("Front", front)],
        ];
        for order in orders {
            let fields = parse_card_fields(&tagged(&order)).unwrap();
            assert_eq!(fields.front, front);
            assert_eq!(fields.back, back);
            assert_eq!(fields.extra, extra);
        }
    }

    #[test]
    fn empty_extra_is_allowed() {
        let fields = parse_card_fields("<Front>a</Front><Back>b</Back><Extra></Extra>").unwrap();
        assert_eq!(fields.extra, "");
    }

    #[test]
    fn each_missing_pair_is_reported() {
        let cases = [
            ("<Back>b</Back><Extra>e</Extra>", "<Front>"),
            ("<Front>f</Front><Extra>e</Extra>", "<Back>"),
            ("<Front>f</Front><Back>b</Back>", "<Extra>"),
            ("<Front>f</Front><Back>b</Back><Extra>e", "</Extra>"),
        ];
        for (raw, tag) in cases {
            assert_eq!(parse_card_fields(raw).unwrap_err(), MissingTagError::new(tag));
        }
    }

    #[test]
    fn failure_is_deterministic() {
        let raw = "<Extra>e</Extra>";
        let first = parse_card_fields(raw).unwrap_err();
        let second = parse_card_fields(raw).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(first.tag, "<Front>");
    }
}
//*** END FILE: src/parsing/card_parser.rs ***//
