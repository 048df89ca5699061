use moodmatch_core::models::scale::{Scale, SeverityBand};

use crate::Instrument;
use crate::scoring::Item;
use crate::severity;

/// Item 9 asks about thoughts of self-harm; any non-zero response raises
/// the urgent safety flag.
pub const SELF_HARM_ITEM: &str = "phq9";

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3 over the past two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn scale(&self) -> Scale {
        Scale::Phq9
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let items = [
                ("phq1", "Little interest or pleasure in doing things"),
                ("phq2", "Feeling down, depressed, or hopeless"),
                ("phq3", "Trouble falling or staying asleep, or sleeping too much"),
                ("phq4", "Feeling tired or having little energy"),
                ("phq5", "Poor appetite or overeating"),
                (
                    "phq6",
                    "Feeling bad about yourself — or that you are a failure or have let yourself or your family down",
                ),
                (
                    "phq7",
                    "Trouble concentrating on things, such as reading or watching television",
                ),
                (
                    "phq8",
                    "Moving or speaking so slowly that others could have noticed? Or the opposite — being fidgety or restless",
                ),
                (
                    SELF_HARM_ITEM,
                    "Thoughts that you would be better off dead or of hurting yourself",
                ),
            ];

            items
                .iter()
                .map(|(id, text)| Item {
                    id: id.to_string(),
                    scale: Scale::Phq9,
                    text: text.to_string(),
                })
                .collect()
        });
        &ITEMS
    }

    fn severity(&self, total: u32) -> SeverityBand {
        severity::severity_band(total, Scale::Phq9)
    }
}
