use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col justify-between gap-3 overflow-hidden rounded-lg border p-4 shadow-md"}
    clx! {CardTitle, h4, "text-2xl font-semibold tracking-tight break-words"}
    clx! {CardContent, p, "text-muted-foreground break-words"}
    clx! {CardFooter, footer, "relative flex items-center justify-between border-t pt-2"}
    clx! {CardGrid, div, "grid gap-4 sm:grid-cols-2 lg:grid-cols-3"}
}

pub use components::*;
