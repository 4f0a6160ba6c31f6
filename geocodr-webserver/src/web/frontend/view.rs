use maud::{html, Markup, DOCTYPE};

const MAIN_CSS_URL: &str = "/main.css";
const MAIN_JS_URL: &str = "/main.js";
const TITLE: &str = "geocodr";

fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head{
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title {(title)}
            link rel="stylesheet" href=(MAIN_CSS_URL);
        }
        body{
            (content)
            script src=(MAIN_JS_URL){}
        }
    }
}

fn service_select(default_service: &str, services: &[&str]) -> Markup {
    html! {
        select name="service" {
            @for service in services {
                @if *service == default_service {
                    option value=(service) selected { (service) " (default)" }
                } @else {
                    option value=(service) { (service) }
                }
            }
        }
    }
}

pub fn index(default_service: &str, services: &[&str]) -> Markup {
    page(
        TITLE,
        html! {
            div class="geocode" {
                h1 { (TITLE) }
                h2 { "Available services" }
                ul class="services" {
                    @for service in services {
                        li { (service) }
                    }
                }
                h2 { "Single address" }
                // submitted as JSON by main.js
                form id="geocode-form" action="/geocode" method="POST" {
                    input type="text" name="address" placeholder="address" required;
                    input type="text" name="name" placeholder="name (optional)";
                    (service_select(default_service, services))
                    input class="btn" type="submit" value="geocode";
                }
                pre id="geocode-result" {}
                h2 { "Batch geocoding" }
                p {
                    "Upload a CSV file with an "
                    code { "address" }
                    " column and an optional "
                    code { "name" }
                    " column."
                }
                form action="/geocode-csv" method="POST" enctype="multipart/form-data" {
                    input type="file" name="file" accept=".csv,text/csv";
                    (service_select(default_service, services))
                    input class="btn" type="submit" value="geocode";
                }
            }
        },
    )
}
