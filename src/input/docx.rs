use super::{read_bytes, LoadError, LoadedDocument};
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use std::path::Path;

/// Load text from a DOCX file, one block per paragraph.
///
/// Paragraphs inside table cells, nested tables included, are emitted in
/// document order alongside body paragraphs. Empty paragraphs still produce
/// an (empty) block.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let bytes = read_bytes(path)?;
    let blocks = paragraphs_from_bytes(&bytes)?;

    tracing::debug!(path = %path.display(), paragraphs = blocks.len(), "DOCX paragraphs extracted");

    Ok(LoadedDocument {
        blocks,
        source: format!("docx:{}", path.display()),
    })
}

pub fn paragraphs_from_bytes(bytes: &[u8]) -> Result<Vec<String>, LoadError> {
    let doc = docx_rs::read_docx(bytes).map_err(|e| LoadError::DocxParse(e.to_string()))?;

    let mut blocks = Vec::new();
    for child in &doc.document.children {
        match child {
            DocumentChild::Paragraph(para) => blocks.push(paragraph_text(para)),
            DocumentChild::Table(table) => push_table(table, &mut blocks),
            _ => {}
        }
    }

    Ok(blocks)
}

fn push_table(table: &Table, blocks: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(tr) = row;
        for cell in &tr.cells {
            let TableRowChild::TableCell(tc) = cell;
            for content in &tc.children {
                match content {
                    TableCellContent::Paragraph(para) => blocks.push(paragraph_text(para)),
                    TableCellContent::Table(inner) => push_table(inner, blocks),
                    _ => {}
                }
            }
        }
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&para.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) | RunChild::PTab(_) => out.push('\t'),
            // soft line breaks separate words just like paragraph ends
            RunChild::Break(_) | RunChild::CarriageReturn(_) => out.push('\n'),
            _ => {}
        }
    }
}
