use anyhow::Result;
use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::modules::transcript::model::TranscriptSegment;

// Letter-size pages, one transcript segment per line.
const PAGE_WIDTH: Pt = Pt(612.0);
const PAGE_HEIGHT: Pt = Pt(792.0);
const MARGIN: f32 = 40.0;
const LINE_HEIGHT: f32 = 14.0;
const FONT_SIZE: f32 = 12.0;

const LAYER_NAME: &str = "text";

/// Draw the transcript onto letter pages and return the PDF bytes.
///
/// Layout: baseline starts at `height - 40`, advances down 14pt per line, and
/// a new page begins once the cursor would drop below the 40pt bottom margin.
/// Long lines overflow the right edge; there is no wrapping.
pub fn render(segments: &[TranscriptSegment]) -> Result<Vec<u8>> {
    let pages = paginate(segments);

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Transcript",
        Mm::from(PAGE_WIDTH),
        Mm::from(PAGE_HEIGHT),
        LAYER_NAME,
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let mut page_index = first_page;
    let mut layer_index = first_layer;
    for (i, lines) in pages.iter().enumerate() {
        if i > 0 {
            let (page, layer) = doc.add_page(Mm::from(PAGE_WIDTH), Mm::from(PAGE_HEIGHT), LAYER_NAME);
            page_index = page;
            layer_index = layer;
        }

        let layer = doc.get_page(page_index).get_layer(layer_index);
        let mut y = PAGE_HEIGHT.0 - MARGIN;
        for line in lines {
            layer.use_text(*line, FONT_SIZE, Mm::from(Pt(MARGIN)), Mm::from(Pt(y)), &font);
            y -= LINE_HEIGHT;
        }
    }

    Ok(doc.save_to_bytes()?)
}

/// Group segment texts into pages by walking the vertical cursor exactly as
/// the renderer does. An empty transcript yields one blank page.
fn paginate(segments: &[TranscriptSegment]) -> Vec<Vec<&str>> {
    let mut pages: Vec<Vec<&str>> = vec![Vec::new()];
    let mut y = PAGE_HEIGHT.0 - MARGIN;

    for segment in segments {
        if y < MARGIN {
            pages.push(Vec::new());
            y = PAGE_HEIGHT.0 - MARGIN;
        }
        // pages is never empty: seeded with one page, only ever pushed to.
        pages
            .last_mut()
            .expect("at least one page")
            .push(segment.text.as_str());
        y -= LINE_HEIGHT;
    }

    pages
}
