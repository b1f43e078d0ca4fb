mod comparators;
mod set;
