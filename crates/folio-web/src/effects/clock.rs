use folio_core::clock::{format_date, format_time, ms_until_next_second, ClockParts};
use std::rc::Rc;
use web_sys as web;

use crate::dom;

fn now_parts() -> ClockParts {
    let d = js_sys::Date::new_0();
    ClockParts {
        year: d.get_full_year() as i32,
        month: d.get_month() + 1,
        day: d.get_date(),
        weekday: d.get_day(),
        hour: d.get_hours(),
        minute: d.get_minutes(),
        second: d.get_seconds(),
    }
}

struct Clock {
    times: Vec<web::Element>,
    dates: Vec<web::Element>,
    twelve_hour: bool,
}

impl Clock {
    fn render(&self) {
        let parts = now_parts();
        let time = format_time(&parts, self.twelve_hour);
        for el in &self.times {
            el.set_text_content(Some(&time));
        }
        if !self.dates.is_empty() {
            let date = format_date(&parts);
            for el in &self.dates {
                el.set_text_content(Some(&date));
            }
        }
    }
}

// Re-arms itself just past each second boundary.
fn tick(clock: Rc<Clock>) {
    clock.render();
    let delay = ms_until_next_second(js_sys::Date::now());
    dom::set_timeout(delay, move || tick(clock));
}

pub fn init(document: &web::Document, twelve_hour: bool) -> anyhow::Result<()> {
    let clock = Clock {
        times: dom::query_all(document, "[data-clock]"),
        dates: dom::query_all(document, "[data-date]"),
        twelve_hour,
    };
    if clock.times.is_empty() && clock.dates.is_empty() {
        anyhow::bail!("no [data-clock] or [data-date] elements");
    }
    log::info!(
        "[clock] {} clock(s), {} date(s)",
        clock.times.len(),
        clock.dates.len()
    );
    tick(Rc::new(clock));
    Ok(())
}
