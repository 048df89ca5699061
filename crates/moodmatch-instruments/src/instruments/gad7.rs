use moodmatch_core::models::scale::{Scale, SeverityBand};

use crate::Instrument;
use crate::scoring::Item;
use crate::severity;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3 over the past two weeks. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn scale(&self) -> Scale {
        Scale::Gad7
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let items = [
                ("gad1", "Feeling nervous, anxious, or on edge"),
                ("gad2", "Not being able to stop or control worrying"),
                ("gad3", "Worrying too much about different things"),
                ("gad4", "Trouble relaxing"),
                ("gad5", "Being so restless that it is hard to sit still"),
                ("gad6", "Becoming easily annoyed or irritable"),
                ("gad7", "Feeling afraid as if something awful might happen"),
            ];

            items
                .iter()
                .map(|(id, text)| Item {
                    id: id.to_string(),
                    scale: Scale::Gad7,
                    text: text.to_string(),
                })
                .collect()
        });
        &ITEMS
    }

    fn severity(&self, total: u32) -> SeverityBand {
        severity::severity_band(total, Scale::Gad7)
    }
}
