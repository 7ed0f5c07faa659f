//! Terminal rendering

use mt_core::api::EvaluationResponse;
use mt_core::models::{CorrectionKind, SerifuEntry};

fn correction_label(kind: CorrectionKind) -> &'static str {
    match kind {
        CorrectionKind::TicketColor => "舟券色",
        CorrectionKind::FlavorTextMarkerA | CorrectionKind::FlavorTextMarkerB => "セリフ",
        CorrectionKind::RareSymbolRate => "5枚役確率",
    }
}

/// Result card as plain text
pub fn render_response(response: &EvaluationResponse) -> String {
    let result = &response.result;
    let mut lines = vec![
        format!("期待値 (約): {}", response.value_text),
        format!("判定: {}", response.action_label),
        response.trace.clone(),
        format!("ベース: {} 円", result.base_value_yen),
    ];

    for c in &result.corrections {
        lines.push(format!("  補正 {}: {:+} 円", correction_label(c.kind), c.amount_yen));
    }

    let hints = &response.hints;
    let named = [
        ("セリフ", &hints.flavor_text),
        ("舟券色", &hints.ticket_color),
        ("予想屋", &hints.forecaster),
        ("終了画面", &hints.end_screen),
    ];
    for (name, hint) in named {
        if let Some(hint) = hint {
            lines.push(format!("  示唆 {name}: {hint}"));
        }
    }

    lines.join("\n")
}

/// One picker label per line
pub fn render_hints<'a>(entries: impl IntoIterator<Item = &'a SerifuEntry>) -> String {
    entries
        .into_iter()
        .map(|e| format!("[{}] {}", e.category, e.display_label()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mt_core::api::{evaluate, EvaluationRequest, SCHEMA_VERSION};
    use mt_core::data::Datasets;
    use mt_core::engine::Evaluator;
    use mt_core::input::{RawExchange, RawObservation};
    use mt_core::models::{MachineState, TicketColor};

    #[test]
    fn test_render_placeholder_card() {
        let request = EvaluationRequest {
            schema_version: SCHEMA_VERSION,
            observation: RawObservation {
                state: MachineState::FirstOfDay,
                ticket_color: TicketColor::Silver,
                ..RawObservation::default()
            },
            exchange: RawExchange::default(),
        };
        let response = evaluate(request, &Datasets::default(), &Evaluator::default()).unwrap();
        let text = render_response(&response);

        assert!(text.starts_with("期待値 (約): ＋3000 円\n判定: 続行"));
        assert!(text.contains("  補正 舟券色: +1000 円"));
        assert!(text.contains("  示唆 舟券色: モードC以上示唆"));
    }

    #[test]
    fn test_render_hints() {
        let entries = vec![SerifuEntry {
            category: "激走".to_string(),
            text: "行くぞ！".to_string(),
            note: "デフォルト".to_string(),
        }];
        assert_eq!(render_hints(&entries), "[激走] 行くぞ！（デフォルト）");
    }
}
