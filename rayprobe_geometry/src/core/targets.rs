use crate::tracing_targets;

tracing_targets! {
    RAY = "ray",
    SHAPE = "shape",
    UTIL = "util",
}
