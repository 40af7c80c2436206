use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

fn add_class(attributes: &mut Vec<Attribute>, class: &'static str) {
    attributes.push(Attribute::new("class", class, None, false));
}

#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    add_class(&mut props.attributes, "alert-dialog-backdrop");
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    props.class.get_or_insert_with(|| "alert-dialog".to_string());
    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    add_class(&mut props.attributes, "alert-dialog-title");
    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    add_class(&mut props.attributes, "alert-dialog-description");
    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    add_class(&mut props.attributes, "alert-dialog-actions");
    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

/// Class plus a `disabled` flag for the dialog's two buttons.
fn button_attributes(
    mut attributes: Vec<Attribute>,
    class: &'static str,
    disabled: bool,
) -> Vec<Attribute> {
    add_class(&mut attributes, class);
    attributes.push(Attribute::new("disabled", disabled, None, false));
    attributes
}

#[derive(Props, Clone, PartialEq)]
pub struct AlertDialogActionProps {
    pub on_click: EventHandler<MouseEvent>,
    /// Blocks the button while the confirmed action is in flight.
    #[props(default)]
    pub disabled: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Confirming button, rendered in the destructive colour.
#[component]
pub fn AlertDialogAction(props: AlertDialogActionProps) -> Element {
    let on_click = props.on_click;
    let attributes = button_attributes(props.attributes, "alert-dialog-action", props.disabled);
    rsx! {
        prim::AlertDialogAction {
            on_click: move |e: MouseEvent| on_click.call(e),
            attributes,
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AlertDialogCancelProps {
    #[props(default)]
    pub disabled: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn AlertDialogCancel(props: AlertDialogCancelProps) -> Element {
    let attributes = button_attributes(props.attributes, "alert-dialog-cancel", props.disabled);
    rsx! {
        prim::AlertDialogCancel { attributes, {props.children} }
    }
}
