use crate::document::{Block, BookingDocument, Row};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ConfirmationVm<'a> {
    pub document: &'a BookingDocument,
    pub nights: i64,
    /// Booking query with the reference pinned, without a leading `?`.
    pub booking_query: String,
}

pub fn confirmation_page(vm: &ConfirmationVm) -> Markup {
    let lang = vm.document.language;
    desktop_layout(
        lang.pick("Booking confirmation", "تأكيد الحجز"),
        lang,
        &format!("/booking/confirmation?{}", vm.booking_query),
        html! {
            main {
                p class="muted" {
                    (lang.pick("Nights", "عدد الليالي")) ": " (vm.nights)
                }
                (document_markup(vm.document))
                p {
                    a href=(format!("/booking/confirmation.pdf?{}", vm.booking_query)) download {
                        (lang.pick("Download confirmation (PDF)", "تحميل التأكيد (PDF)"))
                    }
                }
            }
        },
    )
}

/// HTML rendering of the confirmation, block for block.
fn document_markup(doc: &BookingDocument) -> Markup {
    let start = doc.text_align().as_css();
    let end = doc.direction.end().as_css();
    let row = |r: &Row| {
        html! {
            tr class=[r.muted.then_some("muted")] {
                td style=(format!("text-align: {start}")) { (r.label) }
                td style=(format!("text-align: {end}")) {
                    (r.value)
                    @if let Some(detail) = &r.detail {
                        br;
                        small class="muted" { (detail) }
                    }
                }
            }
        }
    };

    html! {
        div class="card booking-document" dir=(doc.direction.as_html()) style=(format!("text-align: {start}; max-width: 595px; margin: 0 auto;")) {
            @for block in &doc.blocks {
                @match block {
                    Block::Header { name, address, phone } => {
                        div style="background: #0f4c5c; color: #fff; padding: 1rem; border-bottom: 4px solid #c49b44;" {
                            h2 { (name) }
                            div { (address) }
                            div { (phone) }
                        }
                    }
                    Block::Badge { title, message } => {
                        div style="background: #228b54; color: #fff; padding: .75rem; margin: 1rem 0; text-align: center;" {
                            strong { (title) }
                            div { (message) }
                        }
                    }
                    Block::Section(section) => {
                        h3 style="color: #0f4c5c; border-bottom: 1px solid #c49b44;" { (section.title) }
                        table style="width: 100%;" {
                            @for r in &section.rows {
                                (row(r))
                            }
                        }
                    }
                    Block::Total { label, amount } => {
                        div style="background: #c49b44; color: #fff; padding: .75rem; margin: 1rem 0; display: flex; justify-content: space-between;" {
                            strong { (label) }
                            strong { (amount) }
                        }
                    }
                    Block::PaymentStatus { label, status } => {
                        table style="width: 100%;" {
                            (row(&Row::new(label.as_str(), status.as_str())))
                        }
                    }
                    Block::Notes { title, items } => {
                        div style="background: #f4f6f8; padding: .75rem; margin-top: 1rem;" {
                            h4 { (title) }
                            ul {
                                @for item in items {
                                    li { (item) }
                                }
                            }
                        }
                    }
                    Block::Footer { name, phone, generated } => {
                        footer style="text-align: center; border-top: 1px solid #868e96; margin-top: 1rem; padding-top: .5rem;" {
                            div { (name) }
                            div class="muted" { (phone) }
                            div class="muted" { (generated) }
                        }
                    }
                }
            }
        }
    }
}
