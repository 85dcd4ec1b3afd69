use crate::ids::ScreenId;
use crate::navigator::NavHandle;
use crate::params::BoxedParams;
use std::any::{Any, TypeId};
use std::fmt;

/// Presentation style hint for modally presented screens.
///
/// Forwarded unchanged to the navigation-stack collaborator on the stack
/// entry; the core attaches no meaning to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationStyle {
    /// Let the stack collaborator pick its platform default.
    #[default]
    Automatic,
    FullScreen,
    Sheet,
    Overlay,
}

/// Contract for navigable screens.
///
/// A screen is constructed by the resolver through [`Screen::new`], receiving
/// the navigation handle and the (possibly absent) parameter object chosen
/// for the navigation event. After construction the resolver injects the
/// handle once more through [`Screen::set_navigator`], so screens built
/// outside the pipeline behave identically once presented.
///
/// Construction is allowed to fail; a `None` aborts the resolution with no
/// result and no stack mutation.
pub trait Screen: Send + 'static {
    /// Required constructor: navigation handle plus optional parameters.
    fn new(navigator: NavHandle, params: Option<BoxedParams>) -> Option<Self>
    where
        Self: Sized;

    /// Intrinsic identity, stable for the screen's whole lifetime.
    ///
    /// The presenter returns this id and the pop family targets it, so it
    /// must not change after construction.
    fn id(&self) -> ScreenId;

    /// Store the navigation handle so the screen can itself trigger further
    /// navigation later.
    fn set_navigator(&mut self, navigator: NavHandle);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Owned, type-erased screen instance.
pub type BoxedScreen = Box<dyn Screen>;

impl dyn Screen {
    /// Returns true if the boxed screen is an `S`.
    #[must_use]
    pub fn is<S: Screen>(&self) -> bool {
        self.as_any().is::<S>()
    }

    /// Borrowing downcast to the concrete screen type.
    #[must_use]
    pub fn downcast_ref<S: Screen>(&self) -> Option<&S> {
        self.as_any().downcast_ref()
    }

    /// Mutable downcast to the concrete screen type.
    #[must_use]
    pub fn downcast_mut<S: Screen>(&mut self) -> Option<&mut S> {
        self.as_any_mut().downcast_mut()
    }
}

/// Contract for container screens that can wrap another screen as their root.
///
/// The presenter uses this for wrap-on-present: a screen resolved from a URL
/// is placed inside a fresh container before the container is handed to the
/// navigation stack.
pub trait ContainerScreen: Screen {
    /// Construct the container around a root screen.
    ///
    /// Takes ownership of the root. A `None` aborts the presentation.
    fn wrap(root: BoxedScreen) -> Option<Self>
    where
        Self: Sized;
}

/// Runtime descriptor for a container type, captured at the call site.
///
/// [`ContainerSpec::of`] erases a concrete [`ContainerScreen`] into a value
/// that `PresentOptions` can carry: a type identity for the "already such a
/// container" check and a wrap function.
#[derive(Clone, Copy)]
pub struct ContainerSpec {
    container_type: TypeId,
    type_name: &'static str,
    wrap_fn: fn(BoxedScreen) -> Option<BoxedScreen>,
}

impl ContainerSpec {
    /// Capture the container type `C`.
    #[must_use]
    pub fn of<C: ContainerScreen>() -> Self {
        Self {
            container_type: TypeId::of::<C>(),
            type_name: std::any::type_name::<C>(),
            wrap_fn: |root| C::wrap(root).map(|container| Box::new(container) as BoxedScreen),
        }
    }

    /// Whether the screen already is this container type.
    #[must_use]
    pub fn matches(&self, screen: &dyn Screen) -> bool {
        screen.as_any().type_id() == self.container_type
    }

    /// Wrap a root screen in a fresh container instance.
    #[must_use]
    pub fn wrap(&self, root: BoxedScreen) -> Option<BoxedScreen> {
        (self.wrap_fn)(root)
    }

    /// Container type name, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ContainerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerSpec")
            .field("container", &self.type_name)
            .finish()
    }
}
