use crate::types::report::BatchReport;
use crate::types::scoring::ScoreResult;

fn score_or_dash(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |value| format!("{value:.1}"))
}

pub fn to_markdown(result: &ScoreResult) -> String {
    let mut output = String::new();
    output.push_str("# Sentiment\n\n");
    output.push_str(&format!(
        "- sentiment: {}\n- confidence: {:.2}\n- prediction: {}\n- pos_score: {}\n- neg_score: {}\n",
        result.sentiment,
        result.confidence,
        result.prediction,
        score_or_dash(result.pos_score),
        score_or_dash(result.neg_score)
    ));
    output
}

pub fn batch_to_markdown(report: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Sentiment Batch Report\n\n");
    output.push_str(&format!("Engine: {}\n\n", report.engine));
    output.push_str("## Summary\n\n");
    output.push_str(&format!(
        "- total: {}\n- positive: {}\n- negative: {}\n- neutral: {}\n\n",
        report.summary.total,
        report.summary.positive,
        report.summary.negative,
        report.summary.neutral
    ));

    output.push_str("## Documents\n\n");
    if report.documents.is_empty() {
        output.push_str("- none\n");
    } else {
        for document in &report.documents {
            output.push_str(&format!(
                "- {}: {} (confidence {:.2}, pos {}, neg {})\n",
                document.path,
                document.result.sentiment,
                document.result.confidence,
                score_or_dash(document.result.pos_score),
                score_or_dash(document.result.neg_score)
            ));
        }
    }

    output
}
