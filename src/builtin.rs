// src/builtin.rs - Named helper callbacks that configuration files can refer to

use crate::cursor::Position;
use crate::editor::EditorHandle;
use crate::helper::{
    HelperOptions, HintCallback, HintResult, LintCallback, LintFinding, hint_callback,
    lint_callback,
};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_MAX_LINE_LENGTH: u64 = 100;

pub const LINT_BUILTINS: &[&str] = &["trailing-whitespace", "long-lines", "mixed-indentation"];
pub const HINT_BUILTINS: &[&str] = &["buffer-words", "keywords"];

/// Look up a lint builtin. `options` are layered over the options passed at
/// call time.
pub fn lint_builtin(name: &str, options: HelperOptions) -> Option<LintCallback> {
    let run: fn(&str, &HelperOptions) -> Vec<LintFinding> = match name {
        "trailing-whitespace" => trailing_whitespace,
        "long-lines" => long_lines,
        "mixed-indentation" => mixed_indentation,
        _ => return None,
    };
    Some(lint_callback(move |code, call_options, _| {
        Ok(run(code, &options.merged_over(call_options)))
    }))
}

pub fn hint_builtin(name: &str, options: HelperOptions) -> Option<HintCallback> {
    let run: fn(&dyn EditorHandle, &HelperOptions) -> HintResult = match name {
        "buffer-words" => buffer_words,
        "keywords" => keywords,
        _ => return None,
    };
    Some(hint_callback(move |editor, call_options| {
        Ok(run(editor, &options.merged_over(call_options)))
    }))
}

fn lines(code: &str) -> impl Iterator<Item = (usize, &str)> {
    code.lines().enumerate()
}

pub fn trailing_whitespace(code: &str, _options: &HelperOptions) -> Vec<LintFinding> {
    lines(code)
        .filter_map(|(idx, line)| {
            let trimmed = line.trim_end_matches([' ', '\t']);
            if trimmed.len() == line.len() {
                return None;
            }
            Some(LintFinding::warning(
                "Trailing whitespace",
                Position::new(idx, trimmed.chars().count()),
                Position::new(idx, line.chars().count()),
            ))
        })
        .collect()
}

pub fn long_lines(code: &str, options: &HelperOptions) -> Vec<LintFinding> {
    let max = options
        .get_u64("max_line_length")
        .unwrap_or(DEFAULT_MAX_LINE_LENGTH) as usize;
    lines(code)
        .filter_map(|(idx, line)| {
            let len = line.chars().count();
            (len > max).then(|| {
                LintFinding::warning(
                    format!("Line is {} characters long (max {})", len, max),
                    Position::new(idx, max),
                    Position::new(idx, len),
                )
            })
        })
        .collect()
}

pub fn mixed_indentation(code: &str, _options: &HelperOptions) -> Vec<LintFinding> {
    lines(code)
        .filter_map(|(idx, line)| {
            let indent: String = line.chars().take_while(|c| *c == ' ' || *c == '\t').collect();
            (indent.contains(' ') && indent.contains('\t')).then(|| {
                LintFinding::error(
                    "Indentation mixes tabs and spaces",
                    Position::new(idx, 0),
                    Position::new(idx, indent.chars().count()),
                )
            })
        })
        .collect()
}

/// The word prefix being typed and the range a completion should replace.
fn completion_target(editor: &dyn EditorHandle) -> (String, Position, Position) {
    let cursor = editor.cursor();
    let token = editor.token_at(cursor);
    if token.is_word() {
        (token.prefix_before(cursor.column), token.start, token.end)
    } else {
        (String::new(), cursor, cursor)
    }
}

pub fn buffer_words(editor: &dyn EditorHandle, _options: &HelperOptions) -> HintResult {
    let (prefix, from, to) = completion_target(editor);
    let mut seen = HashSet::new();
    let mut list = Vec::new();

    for line in editor.document().lines() {
        for word in line.unicode_words() {
            if word.starts_with(&prefix) && word != prefix && seen.insert(word.to_string()) {
                list.push(word.to_string());
            }
        }
    }
    HintResult::new(list, from, to)
}

pub fn keywords(editor: &dyn EditorHandle, options: &HelperOptions) -> HintResult {
    let (prefix, from, to) = completion_target(editor);
    let list = options
        .get_strings("words")
        .into_iter()
        .filter(|word| word.starts_with(&prefix) && *word != prefix)
        .collect();
    HintResult::new(list, from, to)
}
