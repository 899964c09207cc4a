use crate::config::CinemaOptions;
use crate::media::MediaElement;

use super::CinemaError;
use super::model::Cinema;

/// Something found on the page that an overlay may be attached to.
pub enum PageElement<M> {
    Media(M),
    Other { name: String },
}

/// Attach an overlay to every media element; anything else is reported and skipped.
pub fn attach_all<M, I>(elements: I, options: &CinemaOptions) -> Vec<Cinema<M>>
where
    M: MediaElement,
    I: IntoIterator<Item = PageElement<M>>,
{
    elements
        .into_iter()
        .filter_map(|element| match element {
            PageElement::Media(media) => Some(Cinema::new(media, options.clone())),
            PageElement::Other { name } => {
                log::warn!("{}", CinemaError::UnsupportedElement { name });
                None
            }
        })
        .collect()
}
