//! C-ABI boundary layer for crossbind.
//!
//! This module exposes every service through a flat handle API that is safe
//! to call from C, C++, C#, Python (ctypes/cffi), and any other language
//! that can speak the platform C ABI.
//!
//! # Handle lifecycle
//!
//! Every service type `T` has a `T_create` / `T_destroy` pair. A handle is
//! an opaque pointer-sized registry id, never a real address: operations on
//! a destroyed or null handle dereference nothing and return the
//! operation's documented sentinel instead. `T_destroy` on a null or
//! already-destroyed handle is a no-op, so double-destroy cannot corrupt
//! anything.
//!
//! # Result containers
//!
//! Generators that produce a sequence return a container handle. The
//! container owns its buffer; `*_CResult_getData` returns a borrowed view
//! that stays valid exactly until `*_CResult_free`. Free each container
//! exactly once.
//!
//! # Callbacks
//!
//! Callback parameters are a (function pointer, `user_data` context) pair.
//! They are invoked synchronously on the caller's thread, in documented
//! order, and are never stored or invoked after the operation returns.
//!
//! # Error reporting
//!
//! No error crosses the boundary as a panic or exception. Invalid handles
//! and invalid arguments produce sentinel returns: `-1` / `-1.0` for
//! numeric operations whose domain excludes it, `0` / `0.0` where the
//! original contract says so (notably divide-by-zero), `false` for
//! predicates, and null for pointer results. Where a sentinel is ambiguous
//! with a legitimate value (a real zero quotient, say) the ambiguity is
//! inherited from the original contract and documented on the function.
//!
//! # Usage from C
//!
//! ```c
//! CalculatorHandle calc = Calculator_create();
//! int sum = Calculator_add(calc, 2, 3);
//! Calculator_destroy(calc);
//!
//! GeometryHandle geom = Geometry_create();
//! PointResultHandle line = Geometry_createLine(geom, 0, 0, 100, 100, 5);
//! int count = Geometry_Point_CResult_getCount(line);
//! const Point* data = Geometry_Point_CResult_getData(line);
//! Geometry_Point_CResult_free(line);
//! Geometry_destroy(geom);
//! ```

mod registry;
mod types;

mod calculator;
mod codes;
mod geometry;
mod image;
mod memory;
mod objects;
mod shapes;
mod tasks;

pub use types::*;

pub use calculator::*;
pub use codes::*;
pub use geometry::*;
pub use image::*;
pub use memory::*;
pub use objects::*;
pub use shapes::*;
pub use tasks::*;
