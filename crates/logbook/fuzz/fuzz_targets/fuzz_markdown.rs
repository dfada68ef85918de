#![no_main]

use std::sync::LazyLock;

use libfuzzer_sys::fuzz_target;
use logbook::markdown::{MarkdownRenderer, fenced};

static RENDERER: LazyLock<MarkdownRenderer> = LazyLock::new(MarkdownRenderer::new);

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Commit bodies are arbitrary markdown
        let _ = RENDERER.render(text);
        // Diffs always arrive wrapped in a diff fence
        let _ = RENDERER.render(&fenced("diff", text));
    }
});
