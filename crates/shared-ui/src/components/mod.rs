pub mod alert_dialog;
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page;
pub mod separator;
pub mod textarea;
pub mod toast;

pub use alert_dialog::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle,
};
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use form_select::FormSelect;
pub use input::Input;
pub use page::{PageActions, PageHeader, PageTitle};
pub use separator::Separator;
pub use textarea::Textarea;
pub use toast::{use_toast, ToastOptions, ToastProvider, Toasts};
