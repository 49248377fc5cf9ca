use super::{NoteEditor, NoteModal};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardTitle,
};
use crate::display::{content_summary, format_long_date, title_summary};
use crate::menu::{menu_dom_id, MenuEvent, MenuState, OutsideClickSubscription};
use crate::models::Note;
use crate::notes::delete_note;
use crate::services::BrowserConfirm;
use crate::state::AppContext;
use icons::{Ellipsis, Pencil, Trash2};
use leptos::prelude::*;
use leptos::task::spawn_local;

const MENU_ITEM_CLASS: &str =
    "flex cursor-pointer items-center gap-2 px-4 py-2 text-sm hover:bg-accent [&_svg]:size-4";

/// Summary card for one note with its edit/delete menu.
#[component]
pub fn NoteItem(note: Note) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let menu: RwSignal<MenuState> = RwSignal::new(MenuState::Closed);
    let modal_open: RwSignal<bool> = RwSignal::new(false);

    let send = move |event: MenuEvent| {
        let Some(current) = menu.try_get_untracked() else {
            return;
        };
        let next = current.next(event);
        if next != current {
            menu.set(next);
        }
    };

    let boundary_id = menu_dom_id(&note.id);
    let mut outside_click =
        OutsideClickSubscription::attach(boundary_id.clone(), move |inside| {
            send(MenuEvent::PointerDown { inside })
        });
    on_cleanup(move || outside_click.detach());

    let note_id = StoredValue::new(note.id.clone());
    let api_client = StoredValue::new(app_state.0.api_client.clone());
    let mutations = app_state.0.mutations();

    let on_edit = move |_| {
        send(MenuEvent::ActionChosen);
        modal_open.set(true);
    };

    let on_delete = move |_| {
        send(MenuEvent::ActionChosen);
        let id = note_id.get_value();
        let api_client = api_client.get_value();
        spawn_local(async move {
            delete_note(&api_client, &mutations, &BrowserConfirm, &id).await;
        });
    };

    let close_modal = Callback::new(move |_| modal_open.set(false));
    let editor_note = note.clone();

    view! {
        <Card>
            <div>
                <CardTitle class="mb-2 pb-2">{title_summary(&note.title)}</CardTitle>
                <CardContent class="mb-3">{content_summary(&note.content)}</CardContent>
            </div>

            <CardFooter>
                <span class="text-sm text-muted-foreground">{format_long_date(&note.created_at)}</span>

                <div id=boundary_id class="relative">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:aria-label="Note actions"
                        attr:aria-haspopup="menu"
                        attr:aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| send(MenuEvent::Toggle)
                    >
                        <Ellipsis />
                    </Button>

                    <ul
                        role="menu"
                        class="absolute right-0 bottom-9 z-10 w-28 list-none rounded-md border bg-popover py-1 shadow"
                        class:hidden=move || !menu.get().is_open()
                    >
                        <li role="menuitem" class=MENU_ITEM_CLASS on:click=on_edit>
                            <Pencil />
                            "Edit"
                        </li>
                        <li role="menuitem" class=format!("{MENU_ITEM_CLASS} text-destructive") on:click=on_delete>
                            <Trash2 />
                            "Delete"
                        </li>
                    </ul>
                </div>
            </CardFooter>
        </Card>

        <NoteModal open=modal_open on_close=close_modal>
            <NoteEditor note=editor_note.clone() on_close=close_modal />
        </NoteModal>
    }
}
