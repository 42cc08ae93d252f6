pub trait NetworkDetails {
    fn num_nodes(&self) -> usize;

    fn num_links(&self) -> usize;

    /// Links with at least one endpoint that does not name a node of the network.
    fn num_dangling_links(&self) -> usize;
}
