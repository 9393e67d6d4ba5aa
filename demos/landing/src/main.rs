//! Renders a landing page with the newsletter signup section to stdout.
//!
//! ```sh
//! cargo run -p landing-demo > landing.html
//! ```

use leptos::logging;
use leptos::prelude::*;
use newsletter_ui::prelude::*;

fn main() {
    let content = NewsletterContent::default()
        .with_headline("Ship faster with EdgePlatform")
        .with_sub_headline("Get the monthly changelog.")
        .with_privacy_link("privacy policy", "/legal/privacy");

    let on_subscribe = SubscribeHandler::new(|email| async move {
        logging::log!("demo subscribe: {email}");
        Ok(())
    });

    let owner = Owner::new();
    owner.set();
    let section = view! {
        <NewsletterSection theme="light" content=content on_subscribe=on_subscribe/>
    }
    .to_html();

    println!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\"/>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
         <title>EdgePlatform</title>\n\
         <style>{NEWSLETTER_STYLES}</style>\n\
         </head>\n\
         <body>\n\
         <main>\n\
         {section}\n\
         </main>\n\
         </body>\n\
         </html>"
    );
}
