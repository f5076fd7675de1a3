use floem_reactive::{RwSignal, Scope, SignalGet, untrack};

/// Owns the reactive state behind a generator's event subscriptions.
///
/// Signals and effects created through the bag belong to its [`Scope`]. The
/// scope is disposed when the bag is dropped: effects stop running and
/// control events no longer reach the subscribed callbacks.
pub struct DisposeBag {
    scope: Scope,
}

impl Default for DisposeBag {
    fn default() -> Self {
        Self::new()
    }
}

impl DisposeBag {
    pub fn new() -> Self {
        Self {
            scope: Scope::new(),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn create_rw_signal<T: 'static>(&self, value: T) -> RwSignal<T> {
        self.scope.create_rw_signal(value)
    }

    /// Call `on_next` with every new value of `signal`.
    ///
    /// With `emit_current` the current value is delivered immediately as well.
    /// Signals read by `on_next` are not tracked; only `signal` triggers it.
    pub fn subscribe<T: Clone + 'static>(
        &self,
        signal: RwSignal<T>,
        emit_current: bool,
        on_next: impl Fn(T) + 'static,
    ) {
        self.scope.create_effect(move |subscribed: Option<()>| {
            let value = signal.get();
            if emit_current || subscribed.is_some() {
                untrack(|| on_next(value));
            }
        });
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.scope.dispose();
        tracing::debug!("dispose bag released");
    }
}
