use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::particles::Surface;

/// Document-backed particle surface. Nodes land on `document.body` as
/// `<div>`s keyed by an element id of the form `{tag}-{n}`, so removal can
/// check presence before touching the tree.
#[derive(Clone)]
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn node_id(tag: &str, id: u64) -> String {
        format!("{}-{}", tag, id)
    }
}

impl Surface for DomSurface {
    fn place(&self, id: u64, tag: &str, style: &str) {
        if let Some(body) = self.document.body() {
            if let Ok(node) = self.document.create_element("div") {
                node.set_id(&Self::node_id(tag, id));
                node.set_class_name(tag);
                let _ = node.set_attribute("style", style);
                let _ = body.append_child(&node);
            }
        }
    }

    fn clear(&self, id: u64, tag: &str) -> bool {
        match self.document.get_element_by_id(&Self::node_id(tag, id)) {
            Some(node) => {
                node.remove();
                true
            }
            None => false,
        }
    }

    fn sweep(&self, tag: &str) {
        if let Ok(nodes) = self.document.query_selector_all(&format!(".{}", tag)) {
            for i in 0..nodes.length() {
                if let Some(node) = nodes.item(i) {
                    if let Ok(element) = node.dyn_into::<Element>() {
                        element.remove();
                    }
                }
            }
        }
    }

    fn count(&self, tag: &str) -> usize {
        self.document
            .query_selector_all(&format!(".{}", tag))
            .map(|nodes| nodes.length() as usize)
            .unwrap_or(0)
    }
}
