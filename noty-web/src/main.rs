use std::panic::{self, PanicHookInfo};

use leptos::{mount_to_body, view};
use noty_web::app::App;

fn custom_panic_hook(info: &PanicHookInfo) {
    // print panic message only - not entire stack trace
    let message = info.to_string();
    log::error!("{}", message);
}

pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    if cfg!(debug_assertions) {
        console_error_panic_hook::set_once();
    } else {
        panic::set_hook(Box::new(custom_panic_hook));
    }
    mount_to_body(|| view! { <App /> })
}
