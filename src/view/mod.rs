//! DOM layer: builds the page once, then patches it in response to clicks.
//!
//! Every element is created up front by [`mount`]; overlays are toggled with CSS
//! classes instead of being rebuilt, so each listener is registered exactly once
//! and can be leaked with `forget()`. Page state lives in a thread-local and is
//! only touched from event callbacks, the completion timer and caption futures.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, window};

use crate::album::{Album, TileClick};
use crate::caption;
use crate::config::{self, AssetBase};
use crate::console::{cerror, clog};
use crate::heart::{self, COLS, ROWS};
use crate::letter;
use crate::page::Page;

mod style;

/// Runtime page state plus handles to the elements that change.
struct PageView {
    page: Page,
    base: AssetBase,
    doc: Document,
    grid: Element,
    detail: Element,
    detail_media: Element,
    detail_caption: Element,
    next_button: Element,
    letter: Element,
}

thread_local! {
    static PAGE: RefCell<Option<PageView>> = RefCell::new(None);
}

pub fn mount(base: AssetBase) -> Result<(), JsValue> {
    if PAGE.with(|cell| cell.borrow().is_some()) {
        return Err(JsValue::from_str("album already started"));
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let host: Element = match doc.get_element_by_id(config::MOUNT_ID) {
        Some(el) => el,
        None => Element::from(doc.body().ok_or_else(|| JsValue::from_str("no body"))?),
    };

    let root = element(&doc, "div", "ph-root")?;
    let css = doc.create_element("style")?;
    css.set_text_content(Some(style::STYLESHEET));
    root.append_child(&css)?;

    let header = element(&doc, "header", "ph-header")?;
    let title = element(&doc, "h2", "ph-title")?;
    title.set_text_content(Some(config::TITLE));
    let hint = element(&doc, "p", "ph-hint")?;
    hint.set_text_content(Some(config::SUBTITLE));
    header.append_child(&title)?;
    header.append_child(&hint)?;
    root.append_child(&header)?;

    let album = Album::new(heart::build_tiles(&base));
    let grid = build_grid(&doc, &album)?;
    root.append_child(&grid)?;

    let next_button = build_next_button(&doc)?;
    root.append_child(&next_button)?;

    let (detail, detail_media, detail_caption) = build_detail(&doc)?;
    root.append_child(&detail)?;

    let letter = build_letter(&doc)?;
    root.append_child(&letter)?;

    host.append_child(&root)?;

    clog(&format!(
        "photo-heart: {} tiles, assets under {}",
        album.tiles().len(),
        base.as_str()
    ));
    PAGE.with(|cell| {
        cell.replace(Some(PageView {
            page: Page::new(album),
            base,
            doc,
            grid,
            detail,
            detail_media,
            detail_caption,
            next_button,
            letter,
        }))
    });
    Ok(())
}

// --- Element construction ----------------------------------------------------

fn element(doc: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

fn listen(
    target: &Element,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn build_grid(doc: &Document, album: &Album) -> Result<Element, JsValue> {
    let grid = element(doc, "div", "ph-grid")?;
    for row in 0..ROWS {
        for col in 0..COLS {
            // Explicit placement keeps the heart intact even if a cell fails to render.
            let placement = format!("grid-row:{};grid-column:{};", row + 1, col + 1);
            let Some(tile) = album.tile_at(row as u8, col as u8) else {
                let spacer = element(doc, "div", "ph-empty")?;
                spacer.set_attribute("aria-hidden", "true")?;
                spacer.set_attribute("style", &placement)?;
                grid.append_child(&spacer)?;
                continue;
            };
            let button = element(doc, "button", "ph-tile")?;
            button.set_attribute("type", "button")?;
            button.set_attribute("data-tile-id", &tile.id.to_string())?;
            button.set_attribute("aria-label", "Reveal memory")?;
            button.set_attribute("style", &placement)?;
            let flip = element(doc, "div", "ph-flip")?;
            let cover = element(doc, "div", "ph-cover")?;
            let face = element(doc, "div", "ph-face")?;
            flip.append_child(&cover)?;
            flip.append_child(&face)?;
            button.append_child(&flip)?;
            grid.append_child(&button)?;
        }
    }
    // One delegated listener for all tiles.
    listen(&grid, "click", |evt: Event| {
        if let Some(id) = tile_id_from_event(&evt) {
            with_view(|view| view.on_tile_click(id));
        }
    })?;
    Ok(grid)
}

fn tile_id_from_event(evt: &Event) -> Option<u8> {
    let target: Element = evt.target()?.dyn_into().ok()?;
    let tile = target.closest("[data-tile-id]").ok()??;
    tile.get_attribute("data-tile-id")?.parse().ok()
}

fn build_next_button(doc: &Document) -> Result<Element, JsValue> {
    let button = element(doc, "button", "ph-next")?;
    button.set_attribute("type", "button")?;
    let label = doc.create_element("span")?;
    label.set_text_content(Some("Next"));
    let arrow = element(doc, "span", "ph-arrow")?;
    arrow.set_text_content(Some("\u{2192}"));
    button.append_child(&label)?;
    button.append_child(&arrow)?;
    listen(&button, "click", |_evt: Event| with_view(|view| view.open_letter()))?;
    Ok(button)
}

fn build_detail(doc: &Document) -> Result<(Element, Element, Element), JsValue> {
    let backdrop = element(doc, "div", "ph-detail")?;
    let panel = element(doc, "div", "ph-detail-panel")?;
    let close = element(doc, "button", "ph-detail-close")?;
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Close")?;
    close.set_text_content(Some("\u{00d7}"));
    let media = element(doc, "div", "ph-detail-media")?;
    let caption = element(doc, "p", "ph-caption is-empty")?;
    panel.append_child(&close)?;
    panel.append_child(&media)?;
    panel.append_child(&caption)?;
    backdrop.append_child(&panel)?;

    listen(&backdrop, "click", |_evt: Event| with_view(|view| view.close_detail()))?;
    // Clicks on the media itself must not reach the backdrop.
    listen(&panel, "click", |evt: Event| evt.stop_propagation())?;
    listen(&close, "click", |_evt: Event| with_view(|view| view.close_detail()))?;
    Ok((backdrop, media, caption))
}

fn build_letter(doc: &Document) -> Result<Element, JsValue> {
    let overlay = element(doc, "div", "ph-letter")?;
    let card = element(doc, "div", "ph-letter-card")?;
    let heading = element(doc, "div", "ph-letter-heading")?;
    heading.set_text_content(Some(letter::LETTER_HEADING));
    let body = element(doc, "div", "ph-letter-body")?;
    body.set_text_content(Some(letter::LETTER_CONTENT));
    let close = element(doc, "button", "ph-letter-close")?;
    close.set_attribute("type", "button")?;
    close.set_text_content(Some("Close"));
    card.append_child(&heading)?;
    card.append_child(&body)?;
    card.append_child(&close)?;
    overlay.append_child(&card)?;
    listen(&close, "click", |_evt: Event| with_view(|view| view.close_letter()))?;
    Ok(overlay)
}

// --- State transitions -------------------------------------------------------

fn with_view(f: impl FnOnce(&mut PageView) -> Result<(), JsValue>) {
    PAGE.with(|cell| {
        if let Some(view) = cell.borrow_mut().as_mut() {
            if let Err(err) = f(view) {
                cerror("photo-heart:", &err);
            }
        }
    });
}

impl PageView {
    fn on_tile_click(&mut self, id: u8) -> Result<(), JsValue> {
        match self.page.album.click(id) {
            TileClick::Revealed { id, completed } => {
                self.render_revealed(id)?;
                if completed {
                    schedule_completion();
                }
            }
            TileClick::Expanded { id, request } => {
                self.show_detail(id)?;
                request_caption(self.base.caption(id), request);
            }
            TileClick::Ignored => {}
        }
        Ok(())
    }

    fn render_revealed(&self, id: u8) -> Result<(), JsValue> {
        let Some(tile) = self.page.album.tile(id) else {
            return Ok(());
        };
        let Some(button) = self.grid.query_selector(&format!("[data-tile-id=\"{id}\"]"))? else {
            return Ok(());
        };
        button.class_list().add_1("is-revealed")?;
        button.set_attribute("aria-label", "Open memory")?;
        if let Some(face) = button.query_selector(".ph-face")? {
            let img = self.doc.create_element("img")?;
            img.set_attribute("src", tile.cover_url())?;
            img.set_attribute("alt", "Memory")?;
            img.set_attribute("loading", "lazy")?;
            face.append_child(&img)?;
        }
        Ok(())
    }

    fn show_detail(&self, id: u8) -> Result<(), JsValue> {
        let Some(tile) = self.page.album.expanded().filter(|t| t.id == id) else {
            return Ok(());
        };
        self.detail_media.set_inner_html("");
        let media = if tile.is_video() {
            let video = element(&self.doc, "video", "ph-media")?;
            video.set_attribute("src", &tile.url)?;
            video.set_attribute("controls", "")?;
            video.set_attribute("autoplay", "")?;
            video.set_attribute("playsinline", "")?;
            video
        } else {
            let img = element(&self.doc, "img", "ph-media")?;
            img.set_attribute("src", &tile.url)?;
            img.set_attribute("alt", "Expanded memory")?;
            img
        };
        self.detail_media.append_child(&media)?;
        self.set_caption(None)?;
        self.detail.class_list().add_1("is-open")?;
        Ok(())
    }

    fn set_caption(&self, caption: Option<&str>) -> Result<(), JsValue> {
        self.detail_caption.set_text_content(caption);
        let classes = self.detail_caption.class_list();
        if caption.is_some() {
            classes.remove_1("is-empty")
        } else {
            classes.add_1("is-empty")
        }
    }

    fn close_detail(&mut self) -> Result<(), JsValue> {
        self.page.album.close_detail();
        // Dropping the media element stops any playing video.
        self.detail_media.set_inner_html("");
        self.set_caption(None)?;
        self.detail.class_list().remove_1("is-open")
    }

    fn open_letter(&mut self) -> Result<(), JsValue> {
        if self.page.open_letter() {
            self.letter.class_list().add_1("is-open")?;
        }
        Ok(())
    }

    fn close_letter(&mut self) -> Result<(), JsValue> {
        if self.page.close_letter() {
            self.letter.class_list().remove_1("is-open")?;
        }
        Ok(())
    }
}

fn schedule_completion() {
    Timeout::new(config::COMPLETION_DELAY_MS, || {
        with_view(|view| {
            if view.page.complete() {
                clog("photo-heart: every tile revealed");
                view.next_button.class_list().add_1("is-visible")?;
            }
            Ok(())
        });
    })
    .forget();
}

fn request_caption(url: String, request: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        let text = caption::fetch_caption(&url).await;
        with_view(|view| {
            if view.page.album.accept_caption(request, text) {
                view.set_caption(view.page.album.caption())?;
            }
            Ok(())
        });
    });
}
