//! Plain-text rendering of the quiz view model.

use comfy_table::{Cell, Table};

use verbdrill_core::app::{DetailView, PickerView, QuizView};
use verbdrill_core::model::TenseGroup;
use verbdrill_core::quiz::Mark;
use verbdrill_core::View;

/// Render one screen.
pub fn render(view: &View) -> String {
    match view {
        View::Loading => "loading\n".to_string(),
        View::Quiz(quiz) => render_quiz(quiz),
        View::Detail(detail) => render_detail(detail),
        View::LanguagePicker(picker) => render_picker(picker),
    }
}

fn render_quiz(quiz: &QuizView) -> String {
    let mut out = format!("\n  {}\n\n", quiz.prompt);
    for (i, option) in quiz.options.iter().enumerate() {
        let tag = match option.mark {
            Mark::Correct => "  [correct]",
            Mark::Wrong => "  [wrong]",
            Mark::Neutral => "",
        };
        out.push_str(&format!("  {}. {}{}\n", i + 1, option.label, tag));
    }
    out.push_str(&format!(
        "\n  [d] {}  [n] {}  [s] speak  [l] language  [q] quit\n",
        quiz.detail_label, quiz.next_label
    ));
    out
}

fn render_detail(detail: &DetailView) -> String {
    let mut out = format!("\n  {}: {}\n", detail.title, detail.verb);
    for group in &detail.groups {
        out.push_str(&format!("\n{}\n", group_table(group)));
    }
    out.push_str(&format!("\n  [c] {}\n", detail.close_label));
    out
}

/// A two-column person/form table for one tense.
pub fn group_table(group: &TenseGroup) -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new(&group.title), Cell::new("")]);
    for form in &group.verb {
        table.add_row(vec![Cell::new(&form.person), Cell::new(&form.result)]);
    }
    table
}

fn render_picker(picker: &PickerView) -> String {
    let mut table = Table::new();
    table.set_header(vec!["#", "Code", "Language"]);
    for (i, lang) in picker.languages.iter().enumerate() {
        let code = if lang.current {
            format!("{} *", lang.code)
        } else {
            lang.code.clone()
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(code),
            Cell::new(&lang.name),
        ]);
    }
    format!("\n{table}\n  Type a number or language code.\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use verbdrill_core::app::{LanguageEntry, OptionView};
    use verbdrill_core::model::Conjugation;

    fn quiz(marks: [Mark; 4]) -> View {
        View::Quiz(QuizView {
            prompt: "gehen".into(),
            flag: "/flag/en.png".into(),
            speech_icon: "/volume.svg",
            options: ["to go", "to eat", "to run", "to be"]
                .iter()
                .zip(marks)
                .map(|(label, mark)| OptionView {
                    label: label.to_string(),
                    mark,
                })
                .collect(),
            detail_label: "Conjugation".into(),
            next_label: "Next".into(),
            resolved: marks.iter().any(|m| *m != Mark::Neutral),
        })
    }

    #[test]
    fn loading_screen() {
        assert_eq!(render(&View::Loading), "loading\n");
    }

    #[test]
    fn quiz_lists_numbered_options() {
        let text = render(&quiz([Mark::Neutral; 4]));
        assert!(text.contains("gehen"));
        assert!(text.contains("1. to go"));
        assert!(text.contains("4. to be"));
        assert!(!text.contains("[correct]"));
        assert!(text.contains("[n] Next"));
    }

    #[test]
    fn quiz_shows_marks() {
        let text = render(&quiz([
            Mark::Wrong,
            Mark::Correct,
            Mark::Neutral,
            Mark::Neutral,
        ]));
        assert!(text.contains("1. to go  [wrong]"));
        assert!(text.contains("2. to eat  [correct]"));
    }

    #[test]
    fn detail_shows_every_form() {
        let view = View::Detail(DetailView {
            title: "Conjugation".into(),
            close_label: "Close".into(),
            verb: "sein".into(),
            groups: vec![TenseGroup {
                title: "Präsens".into(),
                verb: vec![
                    Conjugation {
                        person: "ich".into(),
                        result: "bin".into(),
                    },
                    Conjugation {
                        person: "du".into(),
                        result: "bist".into(),
                    },
                ],
            }],
        });
        let text = render(&view);
        assert!(text.contains("Conjugation: sein"));
        assert!(text.contains("Präsens"));
        assert!(text.contains("bist"));
        assert!(text.contains("[c] Close"));
    }

    #[test]
    fn picker_marks_current_language() {
        let view = View::LanguagePicker(PickerView {
            languages: vec![
                LanguageEntry {
                    code: "en".into(),
                    name: "English".into(),
                    flag: "/flag/en.png".into(),
                    current: true,
                },
                LanguageEntry {
                    code: "de".into(),
                    name: "Deutsch".into(),
                    flag: "/flag/de.png".into(),
                    current: false,
                },
            ],
        });
        let text = render(&view);
        assert!(text.contains("en *"));
        assert!(text.contains("Deutsch"));
    }
}
