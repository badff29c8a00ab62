/// Window into the emulator's working RAM, handed to every hook
pub trait RamAccess {
    /// __Reads__ the whole RAM as the emulator sees it
    fn get_ram(&self) -> &[u8];
    /// __Writes__ `value` to the cell at `offset`
    fn set_ram(&mut self, offset: usize, value: u8);

    fn ram(&self, offset: usize) -> u8 {
        self.get_ram()[offset]
    }
}
