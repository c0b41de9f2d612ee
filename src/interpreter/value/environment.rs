use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::interpreter::value::core::Value;

/// Handle to an environment frame stored in a [`Heap`].
///
/// Handles are plain indices plus a generation counter, so closures can refer
/// to their defining environment without owning it. A handle whose frame has
/// been reclaimed by [`Heap::collect`] no longer resolves to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Env {
    index:      usize,
    generation: u32,
}

/// One scope: local bindings plus the scope it is nested in.
#[derive(Debug, Default)]
struct Frame {
    bindings: FxHashMap<String, Value>,
    parent:   Option<Env>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    frame:      Option<Frame>,
}

/// Arena holding every environment frame of an interpreter.
///
/// Frames refer to their parents and closures refer to frames by [`Env`]
/// handle, so reference cycles between closures and the scopes that hold
/// them cannot keep memory alive on their own. All frames are released when
/// the heap is dropped; [`Heap::collect`] reclaims unreachable frames
/// earlier.
///
/// # Example
/// ```
/// use vabna::interpreter::value::{core::Value, environment::Heap};
///
/// let mut heap = Heap::new();
/// let outer = heap.allocate(None);
/// let inner = heap.allocate(Some(outer));
///
/// heap.set(outer, "x", Value::Integer(1));
/// heap.set(inner, "x", Value::Integer(2));
///
/// assert_eq!(heap.get(inner, "x"), Some(Value::Integer(2)));
/// assert_eq!(heap.get(outer, "x"), Some(Value::Integer(1)));
/// ```
#[derive(Debug, Default)]
pub struct Heap {
    slots: Vec<Slot>,
    free:  Vec<usize>,
}

impl Heap {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new, empty frame nested in `parent`.
    pub fn allocate(&mut self, parent: Option<Env>) -> Env {
        let frame = Frame { bindings: FxHashMap::default(),
                            parent };

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.frame = Some(frame);
            return Env { index,
                         generation: slot.generation };
        }

        self.slots.push(Slot { generation: 0,
                               frame:      Some(frame), });
        Env { index:      self.slots.len() - 1,
              generation: 0, }
    }

    fn frame(&self, env: Env) -> Option<&Frame> {
        self.slots
            .get(env.index)
            .filter(|slot| slot.generation == env.generation)
            .and_then(|slot| slot.frame.as_ref())
    }

    fn frame_mut(&mut self, env: Env) -> Option<&mut Frame> {
        self.slots
            .get_mut(env.index)
            .filter(|slot| slot.generation == env.generation)
            .and_then(|slot| slot.frame.as_mut())
    }

    /// Looks `name` up in `env`, then in each enclosing frame in turn.
    ///
    /// Returns `None` when no frame on the chain binds the name.
    #[must_use]
    pub fn get(&self, env: Env, name: &str) -> Option<Value> {
        let mut current = Some(env);
        while let Some(env) = current {
            let frame = self.frame(env)?;
            if let Some(value) = frame.bindings.get(name) {
                return Some(value.clone());
            }
            current = frame.parent;
        }
        None
    }

    /// Binds `name` in the frame `env` itself.
    ///
    /// Enclosing frames are never written: binding a name that an outer frame
    /// already binds shadows it. Binding into a reclaimed frame does nothing.
    pub fn set(&mut self, env: Env, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frame_mut(env) {
            frame.bindings.insert(name.into(), value);
        }
    }

    /// Returns the frame `env` is nested in, if any.
    #[must_use]
    pub fn parent(&self, env: Env) -> Option<Env> {
        self.frame(env).and_then(|frame| frame.parent)
    }

    /// Tests whether `env` still refers to a live frame.
    #[must_use]
    pub fn contains(&self, env: Env) -> bool {
        self.frame(env).is_some()
    }

    /// Number of live frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Tests whether the heap holds no live frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reclaims every frame not reachable from `roots`.
    ///
    /// A frame is reachable when it is a root, the parent of a reachable
    /// frame, or the captured environment of a closure bound (directly or
    /// inside an array) in a reachable frame. Handles to reclaimed frames
    /// become stale. Returns the number of frames reclaimed.
    pub fn collect(&mut self, roots: impl IntoIterator<Item = Env>) -> usize {
        let mut marked = vec![false; self.slots.len()];
        let mut pending = roots.into_iter().collect::<Vec<_>>();

        while let Some(env) = pending.pop() {
            let Some(frame) = self.frame(env) else {
                continue;
            };
            if marked[env.index] {
                continue;
            }
            marked[env.index] = true;

            pending.extend(frame.parent);
            for value in frame.bindings.values() {
                trace_value(value, &mut pending);
            }
        }

        let unmarked = self.slots
                           .iter()
                           .enumerate()
                           .filter(|(index, slot)| slot.frame.is_some() && !marked[*index])
                           .map(|(index, slot)| Env { index,
                                                      generation: slot.generation })
                           .collect::<Vec<_>>();
        for &env in &unmarked {
            self.reclaim(env);
        }

        debug!(freed = unmarked.len(), live = self.len(), "collected environments");
        unmarked.len()
    }

    /// Reclaims the frames in `candidates` that `result` cannot reach.
    ///
    /// `candidates` must be every frame allocated since some point, and no
    /// frame allocated before that point may have been given a reference to
    /// one of them. Under that condition a candidate is reachable from outside
    /// only through `result`, so tracing stops at the first non-candidate
    /// frame. Returns the candidates that were kept.
    ///
    /// # Example
    /// ```
    /// use vabna::interpreter::value::{core::Value, environment::Heap};
    ///
    /// let mut heap = Heap::new();
    /// let global = heap.allocate(None);
    /// let call = heap.allocate(Some(global));
    /// heap.set(call, "x", Value::Integer(1));
    ///
    /// assert!(heap.release(vec![call], &Value::Integer(1)).is_empty());
    /// assert!(!heap.contains(call));
    /// assert!(heap.contains(global));
    /// ```
    pub fn release(&mut self, candidates: Vec<Env>, result: &Value) -> Vec<Env> {
        let candidate_set = candidates.iter().copied().collect::<FxHashSet<_>>();
        let mut reached = FxHashSet::default();
        let mut pending = Vec::new();
        trace_value(result, &mut pending);

        while let Some(env) = pending.pop() {
            if !candidate_set.contains(&env) || !reached.insert(env) {
                continue;
            }
            let Some(frame) = self.frame(env) else {
                continue;
            };
            pending.extend(frame.parent);
            for value in frame.bindings.values() {
                trace_value(value, &mut pending);
            }
        }

        let (kept, dead): (Vec<_>, Vec<_>) =
            candidates.into_iter().partition(|env| reached.contains(env));
        for env in dead {
            self.reclaim(env);
        }
        kept
    }

    fn reclaim(&mut self, env: Env) {
        if let Some(slot) = self.slots.get_mut(env.index)
           && slot.generation == env.generation
           && slot.frame.take().is_some()
        {
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(env.index);
        }
    }
}

/// Pushes every environment `value` keeps alive onto `pending`.
fn trace_value(value: &Value, pending: &mut Vec<Env>) {
    match value {
        Value::Function(function) => pending.push(function.env),
        Value::Array(elements) => {
            for element in elements.iter() {
                trace_value(element, pending);
            }
        },
        Value::Integer(_)
        | Value::Boolean(_)
        | Value::String(_)
        | Value::Null
        | Value::Builtin(_) => {},
    }
}
