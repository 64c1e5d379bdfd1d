pub mod quicksort;
pub mod quicksort_simple;
pub mod selection_sort;
